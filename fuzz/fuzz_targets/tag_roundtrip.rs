#![no_main]

use libfuzzer_sys::fuzz_target;
use pbc_wire::tag::tag_len;
use pbc_wire::varint::decode_varint;
use pbc_wire::{make_tag, split_tag, CodedOutput, WireType, MAX_FIELD_NUMBER};

// Fuzz target: tag pack/unpack and the written tag bytes.
//
// Any u32 either splits into a valid (field, wire type) pair that packs
// back to the same tag, or is rejected. Valid pairs are written and the
// varint read back must match.
fuzz_target!(|raw: u32| {
    let Ok((field_number, wire_type)) = split_tag(raw) else {
        return;
    };
    assert_eq!(make_tag(field_number, wire_type), raw);
    assert!(field_number <= MAX_FIELD_NUMBER);

    let mut out = CodedOutput::new(Vec::new());
    out.write_tag(field_number, wire_type).unwrap();
    let bytes = out.into_inner();
    assert_eq!(bytes.len(), tag_len(field_number));

    let (decoded, _) = decode_varint(&bytes).unwrap();
    assert_eq!(decoded, u64::from(raw));
    assert_eq!(WireType::from_raw(raw & 0x7).unwrap(), wire_type);
});
