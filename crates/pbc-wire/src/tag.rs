use crate::error::WireError;

/// Number of low bits in a tag reserved for the wire type.
pub const TAG_TYPE_BITS: u32 = 3;

/// Mask selecting the wire type bits of a tag.
pub const TAG_TYPE_MASK: u32 = (1 << TAG_TYPE_BITS) - 1;

/// Largest field number protobuf allows: 2^29 - 1.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Protobuf wire types: the 3-bit suffix of every tag.
///
/// ```text
/// ┌──────┬─────────────────┬───────────────────────────────────┐
/// │ Bits │ Wire type       │ Payload format                    │
/// ├──────┼─────────────────┼───────────────────────────────────┤
/// │ 0    │ Varint          │ base-128 varint                   │
/// │ 1    │ Fixed64         │ 8 bytes, little-endian            │
/// │ 2    │ LengthDelimited │ varint length + raw bytes         │
/// │ 3    │ StartGroup      │ deprecated group start marker     │
/// │ 4    │ EndGroup        │ deprecated group end marker       │
/// │ 5    │ Fixed32         │ 4 bytes, little-endian            │
/// └──────┴─────────────────┴───────────────────────────────────┘
/// ```
///
/// The field codec never produces group markers; they are listed so that
/// every wire type a standard decoder accepts can be named here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    /// Convert the low three bits of a tag into a [`WireType`].
    ///
    /// Returns `Err(WireError::InvalidWireType)` for 6 and 7.
    pub fn from_raw(value: u32) -> Result<Self, WireError> {
        match value {
            0 => Ok(Self::Varint),
            1 => Ok(Self::Fixed64),
            2 => Ok(Self::LengthDelimited),
            3 => Ok(Self::StartGroup),
            4 => Ok(Self::EndGroup),
            5 => Ok(Self::Fixed32),
            other => Err(WireError::InvalidWireType { value: other }),
        }
    }

    /// The raw bits this wire type occupies in a tag.
    #[must_use]
    pub fn bits(self) -> u32 {
        self as u32
    }
}

/// Pack a field number and wire type into a protobuf tag.
///
/// `tag = (field_number << 3) | wire_type`
///
/// The caller guarantees `1 <= field_number <= MAX_FIELD_NUMBER`; schema
/// construction enforces this for every descriptor.
#[must_use]
pub fn make_tag(field_number: u32, wire_type: WireType) -> u32 {
    debug_assert!(
        (1..=MAX_FIELD_NUMBER).contains(&field_number),
        "field number {field_number} out of range"
    );
    (field_number << TAG_TYPE_BITS) | wire_type.bits()
}

/// Unpack a tag into `(field_number, wire_type)`.
///
/// # Errors
///
/// - [`WireError::InvalidFieldNumber`] if the field number is zero.
/// - [`WireError::InvalidWireType`] if the low bits are 6 or 7.
pub fn split_tag(tag: u32) -> Result<(u32, WireType), WireError> {
    let wire_type = WireType::from_raw(tag & TAG_TYPE_MASK)?;
    let field_number = tag >> TAG_TYPE_BITS;
    if field_number == 0 {
        return Err(WireError::InvalidFieldNumber { number: 0 });
    }
    Ok((field_number, wire_type))
}

/// Encoded length of a tag for `field_number`, in bytes (1–5).
///
/// Field numbers 1..=15 fit in one byte, 16..=2047 in two.
#[must_use]
pub fn tag_len(field_number: u32) -> usize {
    crate::varint::varint_len(u64::from(field_number << TAG_TYPE_BITS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_for_field_one_varint() {
        assert_eq!(make_tag(1, WireType::Varint), 0x08);
    }

    #[test]
    fn tag_for_length_delimited() {
        assert_eq!(make_tag(2, WireType::LengthDelimited), 0x12);
    }

    #[test]
    fn tag_for_fixed32_and_fixed64() {
        assert_eq!(make_tag(3, WireType::Fixed64), 0x19);
        assert_eq!(make_tag(4, WireType::Fixed32), 0x25);
    }

    #[test]
    fn split_recovers_every_wire_type() {
        let all = [
            WireType::Varint,
            WireType::Fixed64,
            WireType::LengthDelimited,
            WireType::StartGroup,
            WireType::EndGroup,
            WireType::Fixed32,
        ];
        for number in [1, 15, 16, 2047, 2048, MAX_FIELD_NUMBER] {
            for wire_type in all {
                let tag = make_tag(number, wire_type);
                assert_eq!(split_tag(tag).unwrap(), (number, wire_type));
            }
        }
    }

    #[test]
    fn split_rejects_invalid_wire_bits() {
        assert!(matches!(
            split_tag((1 << 3) | 6),
            Err(WireError::InvalidWireType { value: 6 })
        ));
        assert!(matches!(
            split_tag((1 << 3) | 7),
            Err(WireError::InvalidWireType { value: 7 })
        ));
    }

    #[test]
    fn split_rejects_field_zero() {
        assert!(matches!(
            split_tag(0),
            Err(WireError::InvalidFieldNumber { number: 0 })
        ));
    }

    #[test]
    fn tag_len_boundaries() {
        assert_eq!(tag_len(1), 1);
        assert_eq!(tag_len(15), 1);
        assert_eq!(tag_len(16), 2);
        assert_eq!(tag_len(2047), 2);
        assert_eq!(tag_len(2048), 3);
        assert_eq!(tag_len(MAX_FIELD_NUMBER), 5);
    }
}
