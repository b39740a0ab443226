use pbc_types::{Cardinality, FieldType, ValueKind};
use pbc_wire::WireError;

/// Errors that can occur while sizing, validating or writing a message.
///
/// Error hierarchy:
///
/// ```text
///   EncodeError
///   ├── UninitializedMessage ← required field(s) absent, checked before any write
///   ├── TypeMismatch         ← accessor value does not match the field type
///   ├── CardinalityMismatch  ← list for a scalar field, or the reverse
///   ├── MessageTooLarge      ← exact encoded size exceeds the configured limit
///   └── Wire(WireError)      ← from the pbc-wire output sink (writes and flush)
/// ```
///
/// Nothing here is retried internally. After a `Wire` error the sink may
/// hold a partially written message; [`EncodeError::is_io`] tells the two
/// apart from message errors.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// One or more required fields were absent. With the default fail-fast
    /// check `missing` holds exactly the first one, by field number.
    #[error("message is missing required fields: {}", missing.join(", "))]
    UninitializedMessage { missing: Vec<String> },

    #[error("field {field_number} of type {field_type} cannot hold a {found} value")]
    TypeMismatch {
        field_number: u32,
        field_type: FieldType,
        found: ValueKind,
    },

    #[error("field {field_number} is {expected:?} but the accessor returned the other cardinality")]
    CardinalityMismatch {
        field_number: u32,
        expected: Cardinality,
    },

    #[error("encoded message is {size} bytes, limit is {limit}")]
    MessageTooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Wire(#[from] WireError),
}

impl EncodeError {
    /// `true` when the output sink, not the message, caused the failure.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Wire(WireError::Io(_)))
    }
}
