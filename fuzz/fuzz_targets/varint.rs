#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: base-128 varint decoder.
//
// Catches bugs in:
// - VarintTooLong (more than 10 bytes)
// - Zero-length and truncated input
// - 10th-byte overflow past 64 bits
fuzz_target!(|data: &[u8]| {
    if let Ok((value, len)) = pbc_wire::varint::decode_varint(data) {
        assert!(len <= pbc_wire::varint::MAX_VARINT_LEN);
        assert!(pbc_wire::varint::varint_len(value) <= len);
    }
});
