use std::io::Write;

use crate::error::WireError;
use crate::tag::{WireType, make_tag};
use crate::varint::{MAX_VARINT_LEN, encode_varint, zigzag_encode32, zigzag_encode64};

/// Protobuf output sink over any [`std::io::Write`].
///
/// `CodedOutput` provides the wire-level write primitives the field codec
/// builds on: tags, base-128 varints, zig-zag varints, little-endian
/// fixed-width values and length-delimited byte runs. It keeps a running
/// count of bytes accepted by the inner writer.
///
/// ```text
/// ┌──────────────────────────┬────────────────────────────────────┐
/// │ Method                   │ Bytes produced                     │
/// ├──────────────────────────┼────────────────────────────────────┤
/// │ write_tag                │ varint((field << 3) | wire_type)   │
/// │ write_varint             │ 1–10 byte varint                   │
/// │ write_sint32 / sint64    │ varint(zigzag(value))              │
/// │ write_fixed32            │ 4 bytes little-endian              │
/// │ write_fixed64            │ 8 bytes little-endian              │
/// │ write_length_delimited   │ varint(len) + bytes                │
/// └──────────────────────────┴────────────────────────────────────┘
/// ```
///
/// Writes go straight through to the inner writer. When the writer fails
/// the error is returned and whatever was already written stays written;
/// wrap the sink in a `BufWriter` or encode into a `Vec<u8>` when that
/// matters.
pub struct CodedOutput<W> {
    inner: W,
    written: usize,
}

impl<W: Write> CodedOutput<W> {
    /// Wrap a writer. The byte count starts at zero.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Total number of bytes written so far.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Borrow the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consume the sink and return the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Flush the inner writer.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] when the inner writer fails to flush.
    pub fn flush(&mut self) -> Result<(), WireError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Write raw bytes with no framing.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] when the inner writer rejects the bytes. The
    /// byte count only includes writes that fully succeeded.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    /// Write a base-128 varint.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_varint(&mut self, value: u64) -> Result<(), WireError> {
        let mut scratch = [0u8; MAX_VARINT_LEN];
        let n = encode_varint(value, &mut scratch);
        self.write_raw(&scratch[..n])
    }

    /// Write the tag for `field_number` with the given wire type.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_tag(&mut self, field_number: u32, wire_type: WireType) -> Result<(), WireError> {
        self.write_varint(u64::from(make_tag(field_number, wire_type)))
    }

    /// Write an `int32` payload. Negative values are sign-extended to
    /// 64 bits first, so they always take ten bytes.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_int32(&mut self, value: i32) -> Result<(), WireError> {
        self.write_varint(i64::from(value) as u64)
    }

    /// Write an `int64` payload as its two's-complement bit pattern.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_int64(&mut self, value: i64) -> Result<(), WireError> {
        self.write_varint(value as u64)
    }

    /// Write a zig-zag encoded `sint32` payload.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_sint32(&mut self, value: i32) -> Result<(), WireError> {
        self.write_varint(u64::from(zigzag_encode32(value)))
    }

    /// Write a zig-zag encoded `sint64` payload.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_sint64(&mut self, value: i64) -> Result<(), WireError> {
        self.write_varint(zigzag_encode64(value))
    }

    /// Write a `bool` payload as a single varint byte.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_bool(&mut self, value: bool) -> Result<(), WireError> {
        self.write_raw(&[u8::from(value)])
    }

    /// Write four bytes little-endian.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_fixed32(&mut self, value: u32) -> Result<(), WireError> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Write eight bytes little-endian.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_fixed64(&mut self, value: u64) -> Result<(), WireError> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Write a varint length prefix followed by `bytes`.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] from the inner writer, as for
    /// [`write_raw`](Self::write_raw).
    pub fn write_length_delimited(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        self.write_varint(bytes.len() as u64)?;
        self.write_raw(bytes)
    }
}
