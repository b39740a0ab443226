use crate::error::WireError;

/// Maximum number of bytes a u64 varint can occupy.
/// ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_LEN: usize = 10;

/// Encode a `u64` value as a protobuf base-128 varint into the provided buffer.
///
/// # Returns
///
/// The number of bytes written (1–10).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A [`MAX_VARINT_LEN`]-byte buffer is always sufficient for any `u64`.
///
/// # Wire format examples
///
/// | Value   | Encoded bytes        | Length |
/// |---------|----------------------|--------|
/// | 0       | `[0x00]`             | 1      |
/// | 1       | `[0x01]`             | 1      |
/// | 127     | `[0x7F]`             | 1      |
/// | 128     | `[0x80, 0x01]`       | 2      |
/// | 300     | `[0xAC, 0x02]`       | 2      |
/// | 16383   | `[0xFF, 0x7F]`       | 2      |
/// | 16384   | `[0x80, 0x80, 0x01]` | 3      |
pub fn encode_varint(mut value: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        // Take the lowest 7 bits
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value > 0 {
            // More bytes to come: set the continuation bit
            byte |= 0x80;
        }

        buf[i] = byte;
        i += 1;

        if value == 0 {
            break;
        }
    }
    i
}

/// Decode a protobuf base-128 varint from the provided byte slice.
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success.
///
/// # Errors
///
/// - [`WireError::VarintTooLong`] if more than 10 bytes are consumed
///   without finding a terminating byte.
/// - [`WireError::UnexpectedEof`] if the slice ends mid-varint.
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize), WireError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_VARINT_LEN {
            return Err(WireError::VarintTooLong);
        }

        let data = u64::from(byte & 0x7F);
        result |= data << shift;
        shift += 7;

        // If MSB is clear, this is the last byte
        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }

    Err(WireError::UnexpectedEof { offset: buf.len() })
}

/// Number of bytes `encode_varint` would emit for `value`, between 1 and 10.
///
/// Each byte carries 7 payload bits, so this is `ceil(bit_length / 7)`
/// with zero counted as one bit. The arithmetic form avoids a loop.
#[must_use]
pub fn varint_len(value: u64) -> usize {
    let bits = (value | 1).leading_zeros() ^ 63;
    ((bits * 9 + 73) / 64) as usize
}

/// Zig-zag map a signed 32-bit value so small magnitudes stay small.
///
/// ```text
///  0 → 0,  -1 → 1,  1 → 2,  -2 → 3, ...  i32::MIN → u32::MAX
/// ```
#[must_use]
pub fn zigzag_encode32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// 64-bit counterpart of [`zigzag_encode32`].
#[must_use]
pub fn zigzag_encode64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode32`].
#[must_use]
pub fn zigzag_decode32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Inverse of [`zigzag_encode64`].
#[must_use]
pub fn zigzag_decode64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
