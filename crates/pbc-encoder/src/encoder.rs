use std::io::Write;

use pbc_types::FieldAccess;
use pbc_wire::CodedOutput;

use crate::config::{EncoderConfig, SizingMode};
use crate::error::EncodeError;
use crate::required::check_message;
use crate::size::size_of_field;
use crate::writer::write_field;

/// Serializes messages described by a [`MessageSchema`] into protobuf bytes.
///
/// The encoder is stateless apart from its configuration, so one instance
/// can be shared freely (it is `Copy`) and used from many threads at once.
/// Each call walks the message's fields in ascending field-number order:
///
/// ```text
///   1. required check   ← every required field present? (fail-fast by default)
///   2. size pass        ← size_of_field in Exact mode for every field, summed
///   3. limit check      ← exact size <= config.size_limit
///   4. write pass       ← write_field for every field, into the sink
/// ```
///
/// The size pass always uses [`SizingMode::Exact`]: the legacy estimate
/// can land on either side of the real length, so it is only reported by
/// [`encoded_len`](Self::encoded_len) and never used for the limit.
///
/// No byte is written unless steps 1–3 succeed. A sink error during step 4
/// aborts the remaining fields and leaves a partial message in the sink.
///
/// # Usage
///
/// ```rust,ignore
/// use pbc_encoder::MessageEncoder;
///
/// let bytes = MessageEncoder::new().encode_to_vec(&message)?;
/// ```
///
/// [`MessageSchema`]: pbc_types::MessageSchema
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageEncoder {
    config: EncoderConfig,
}

impl MessageEncoder {
    /// Create an encoder with [`EncoderConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Check the message's required fields without encoding anything.
    ///
    /// # Errors
    ///
    /// [`EncodeError::UninitializedMessage`] naming the first missing
    /// required field, or all of them under `RequiredCheck::Aggregate`.
    pub fn validate<M: FieldAccess + ?Sized>(&self, message: &M) -> Result<(), EncodeError> {
        check_message(message, self.config.required_check)
    }

    /// Serialized size of `message` under the configured sizing mode.
    ///
    /// Required fields are not checked here.
    ///
    /// # Errors
    ///
    /// [`EncodeError::TypeMismatch`] or [`EncodeError::CardinalityMismatch`]
    /// when an accessor value contradicts its descriptor.
    pub fn encoded_len<M: FieldAccess + ?Sized>(&self, message: &M) -> Result<usize, EncodeError> {
        sum_field_sizes(message, self.config.sizing)
    }

    /// Validate, size and encode `message` into a freshly allocated buffer.
    ///
    /// # Errors
    ///
    /// Any error from [`validate`](Self::validate) or
    /// [`encoded_len`](Self::encoded_len), and
    /// [`EncodeError::MessageTooLarge`] when the exact size is over the
    /// configured limit.
    pub fn encode_to_vec<M: FieldAccess + ?Sized>(&self, message: &M) -> Result<Vec<u8>, EncodeError> {
        let size = self.prepare(message)?;

        let mut out = CodedOutput::new(Vec::with_capacity(size));
        self.write_fields(message, &mut out)?;

        let written = out.bytes_written();
        if written != size {
            log::warn!(
                "{}: precomputed size {size} but wrote {written} bytes",
                message.schema().name()
            );
        }
        Ok(out.into_inner())
    }

    /// Validate, size and encode `message` into `writer`.
    ///
    /// Returns the number of bytes written. The writer is flushed on success.
    ///
    /// # Errors
    ///
    /// The same as [`encode_to_vec`](Self::encode_to_vec), plus
    /// [`EncodeError::Wire`] when the writer fails a write or the final
    /// flush. Fields after a failed write are not attempted.
    pub fn encode_to_writer<M, W>(&self, message: &M, writer: W) -> Result<usize, EncodeError>
    where
        M: FieldAccess + ?Sized,
        W: Write,
    {
        self.prepare(message)?;

        let mut out = CodedOutput::new(writer);
        self.write_fields(message, &mut out)?;
        out.flush()?;
        Ok(out.bytes_written())
    }

    /// Steps 1–3: required check, exact size pass and limit check.
    fn prepare<M: FieldAccess + ?Sized>(&self, message: &M) -> Result<usize, EncodeError> {
        self.validate(message)?;

        let size = sum_field_sizes(message, SizingMode::Exact)?;
        log::debug!("encoding {} ({size} bytes)", message.schema().name());

        if size > self.config.size_limit {
            return Err(EncodeError::MessageTooLarge {
                size,
                limit: self.config.size_limit,
            });
        }
        Ok(size)
    }

    fn write_fields<M, W>(&self, message: &M, out: &mut CodedOutput<W>) -> Result<(), EncodeError>
    where
        M: FieldAccess + ?Sized,
        W: Write,
    {
        for field in message.schema().fields() {
            let value = message.field_value(field);
            write_field(out, field, &value)?;
        }
        Ok(())
    }
}

fn sum_field_sizes<M: FieldAccess + ?Sized>(message: &M, mode: SizingMode) -> Result<usize, EncodeError> {
    let mut total = 0;
    for field in message.schema().fields() {
        let value = message.field_value(field);
        let size = size_of_field(field, &value, mode)?;
        log::trace!("field {:?} (#{}): {size} bytes ({mode:?})", field.name(), field.number());
        total += size;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RequiredCheck;
    use pbc_types::{FieldDescriptor, FieldType, FieldValue, MessageSchema};

    struct Counter {
        schema: MessageSchema,
        hits: Option<u64>,
        label: Option<String>,
    }

    impl Counter {
        fn new(hits: Option<u64>, label: Option<&str>) -> Self {
            let schema = MessageSchema::builder("Counter")
                .field(FieldDescriptor::scalar(1, "hits", FieldType::UInt64).required())
                .field(FieldDescriptor::scalar(2, "label", FieldType::String))
                .build()
                .unwrap();
            Self {
                schema,
                hits,
                label: label.map(str::to_string),
            }
        }
    }

    impl FieldAccess for Counter {
        fn schema(&self) -> &MessageSchema {
            &self.schema
        }

        fn field_value(&self, field: &FieldDescriptor) -> FieldValue<'_> {
            match field.number() {
                1 => FieldValue::optional(self.hits),
                2 => FieldValue::optional(self.label.as_ref()),
                _ => FieldValue::Absent,
            }
        }
    }

    struct Readings {
        schema: MessageSchema,
        values: Vec<i32>,
    }

    impl Readings {
        fn new(values: Vec<i32>) -> Self {
            let schema = MessageSchema::builder("Readings")
                .field(FieldDescriptor::repeated(1, "values", FieldType::Int32))
                .build()
                .unwrap();
            Self { schema, values }
        }
    }

    impl FieldAccess for Readings {
        fn schema(&self) -> &MessageSchema {
            &self.schema
        }

        fn field_value(&self, field: &FieldDescriptor) -> FieldValue<'_> {
            match field.number() {
                1 => FieldValue::list(self.values.iter().copied()),
                _ => FieldValue::Absent,
            }
        }
    }

    /// Accepts up to `capacity` bytes, then fails every write.
    struct ShortWriter {
        accepted: Vec<u8>,
        capacity: usize,
        fail_flush: bool,
    }

    impl ShortWriter {
        fn new(capacity: usize) -> Self {
            Self {
                accepted: Vec::new(),
                capacity,
                fail_flush: false,
            }
        }
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let room = self.capacity - self.accepted.len();
            if room == 0 {
                return Err(std::io::Error::other("sink full"));
            }
            let n = room.min(buf.len());
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            if self.fail_flush {
                return Err(std::io::Error::other("flush failed"));
            }
            Ok(())
        }
    }

    #[test]
    fn encodes_fields_in_order() {
        let msg = Counter::new(Some(3), Some("ok"));
        let bytes = MessageEncoder::new().encode_to_vec(&msg).unwrap();
        assert_eq!(bytes, vec![0x08, 0x03, 0x12, 0x02, b'o', b'k']);
    }

    #[test]
    fn encoded_len_matches_output() {
        let msg = Counter::new(Some(300), Some("label"));
        let encoder = MessageEncoder::new();
        let bytes = encoder.encode_to_vec(&msg).unwrap();
        assert_eq!(encoder.encoded_len(&msg).unwrap(), bytes.len());
    }

    #[test]
    fn missing_required_writes_nothing() {
        let msg = Counter::new(None, Some("ok"));
        let mut sink = Vec::new();
        let result = MessageEncoder::new().encode_to_writer(&msg, &mut sink);
        assert!(matches!(result, Err(EncodeError::UninitializedMessage { .. })));
        assert!(sink.is_empty());
    }

    #[test]
    fn size_limit_enforced_before_writing() {
        let msg = Counter::new(Some(1), Some("a fairly long label"));
        let encoder = MessageEncoder::with_config(EncoderConfig {
            size_limit: 8,
            ..EncoderConfig::default()
        });
        let mut sink = Vec::new();
        let result = encoder.encode_to_writer(&msg, &mut sink);
        assert!(matches!(result, Err(EncodeError::MessageTooLarge { size: 23, limit: 8 })));
        assert!(sink.is_empty());
    }

    #[test]
    fn legacy_sizing_does_not_bypass_size_limit() {
        // legacy counts each -1 as 4 + 1 bytes; it is written as 1 + 10
        let msg = Readings::new(vec![-1, -1]);
        let encoder = MessageEncoder::with_config(EncoderConfig {
            sizing: SizingMode::Legacy,
            size_limit: 12,
            ..EncoderConfig::default()
        });
        assert_eq!(encoder.encoded_len(&msg).unwrap(), 10);

        let mut sink = Vec::new();
        let result = encoder.encode_to_writer(&msg, &mut sink);
        assert!(matches!(result, Err(EncodeError::MessageTooLarge { size: 22, limit: 12 })));
        assert!(sink.is_empty());
        assert!(matches!(
            encoder.encode_to_vec(&msg),
            Err(EncodeError::MessageTooLarge { size: 22, .. })
        ));
    }

    #[test]
    fn legacy_sizing_within_limit_writes_exact_bytes() {
        let msg = Readings::new(vec![-1, 1]);
        let encoder = MessageEncoder::with_config(EncoderConfig {
            sizing: SizingMode::Legacy,
            size_limit: 13,
            ..EncoderConfig::default()
        });
        let bytes = encoder.encode_to_vec(&msg).unwrap();
        assert_eq!(bytes.len(), 13);
        assert_eq!(&bytes[11..], &[0x08, 0x01]);
    }

    #[test]
    fn sink_failure_stops_remaining_fields() {
        // room for field 1 (08 03) only; the label's tag hits the wall
        let msg = Counter::new(Some(3), Some("ok"));
        let mut sink = ShortWriter::new(2);
        let err = MessageEncoder::new().encode_to_writer(&msg, &mut sink).unwrap_err();
        assert!(err.is_io(), "expected an I/O error, got {err:?}");
        assert_eq!(sink.accepted, vec![0x08, 0x03]);
    }

    #[test]
    fn sink_failure_mid_field_leaves_partial_unit() {
        let msg = Counter::new(Some(3), Some("ok"));
        let mut sink = ShortWriter::new(4);
        let err = MessageEncoder::new().encode_to_writer(&msg, &mut sink).unwrap_err();
        assert!(err.is_io());
        assert_eq!(sink.accepted, vec![0x08, 0x03, 0x12, 0x02]);
    }

    #[test]
    fn flush_failure_is_io() {
        let msg = Counter::new(Some(3), None);
        let mut sink = ShortWriter::new(usize::MAX);
        sink.fail_flush = true;
        let err = MessageEncoder::new().encode_to_writer(&msg, &mut sink).unwrap_err();
        assert!(err.is_io());
        assert!(matches!(err, EncodeError::Wire(_)));
        assert_eq!(sink.accepted, vec![0x08, 0x03]);
    }

    #[test]
    fn message_errors_are_not_io() {
        let msg = Counter::new(None, None);
        let err = MessageEncoder::new().encode_to_vec(&msg).unwrap_err();
        assert!(!err.is_io());
    }

    #[test]
    fn writer_and_vec_agree() {
        let msg = Counter::new(Some(42), None);
        let encoder = MessageEncoder::new();
        let mut sink = Vec::new();
        let n = encoder.encode_to_writer(&msg, &mut sink).unwrap();
        assert_eq!(n, sink.len());
        assert_eq!(sink, encoder.encode_to_vec(&msg).unwrap());
    }

    #[test]
    fn validate_uses_configured_mode() {
        let msg = Counter::new(None, None);
        let encoder = MessageEncoder::with_config(EncoderConfig {
            required_check: RequiredCheck::Aggregate,
            ..EncoderConfig::default()
        });
        let err = encoder.validate(&msg).unwrap_err();
        assert!(matches!(err, EncodeError::UninitializedMessage { ref missing } if missing == &["hits"]));
    }
}
