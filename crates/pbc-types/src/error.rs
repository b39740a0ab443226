use crate::field_type::FieldType;

/// Errors raised while assembling a [`MessageSchema`](crate::MessageSchema).
///
/// These are all programmer errors in the schema definition. They are
/// reported once, when the schema is built, so the encoder never sees an
/// invalid descriptor.
///
/// ```text
/// ┌───────────────────────┬───────────────────────────────────────────┐
/// │ Variant               │ Cause                                     │
/// ├───────────────────────┼───────────────────────────────────────────┤
/// │ InvalidFieldNumber    │ number is 0 or above 2^29 - 1             │
/// │ DuplicateFieldNumber  │ two fields share a number                 │
/// │ DuplicateFieldName    │ two fields share a name                   │
/// │ RawPresenceNotAllowed │ Raw presence on repeated/string/bytes     │
/// │ UnknownFieldType      │ type name outside the supported set       │
/// └───────────────────────┴───────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("field {name:?} has invalid number {number}")]
    InvalidFieldNumber { name: String, number: u32 },

    #[error("field number {number} is used more than once")]
    DuplicateFieldNumber { number: u32 },

    #[error("field name {name:?} is used more than once")]
    DuplicateFieldName { name: String },

    /// Raw storage only makes sense for a single primitive value.
    #[error("field {name:?} of type {field_type} cannot use raw presence")]
    RawPresenceNotAllowed { name: String, field_type: FieldType },

    /// A field type was looked up by a name outside the closed set.
    #[error("unsupported field type: {name}")]
    UnknownFieldType { name: String },
}
