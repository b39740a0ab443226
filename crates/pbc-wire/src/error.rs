/// Errors raised by the wire-level primitives.
///
/// ```text
/// ┌─────────────────────┬──────────────────────────────────────────────┐
/// │ Variant             │ Cause                                        │
/// ├─────────────────────┼──────────────────────────────────────────────┤
/// │ VarintTooLong       │ more than 10 continuation bytes              │
/// │ UnexpectedEof       │ input ended inside a varint                  │
/// │ InvalidWireType     │ tag carried wire bits 6 or 7                 │
/// │ InvalidFieldNumber  │ field number 0 or above 2^29 - 1             │
/// │ Io                  │ the output sink rejected a write             │
/// └─────────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Varint encoding exceeded 10 bytes without terminating.
    #[error("varint too long: exceeded 10-byte limit")]
    VarintTooLong,

    /// Input ended before a complete varint could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// The low three bits of a tag did not name a protobuf wire type.
    #[error("invalid wire type {value} in tag")]
    InvalidWireType { value: u32 },

    /// A field number outside `1..=MAX_FIELD_NUMBER`.
    #[error("invalid field number {number}: must be in 1..=536870911")]
    InvalidFieldNumber { number: u64 },

    /// I/O error while writing to the output sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

