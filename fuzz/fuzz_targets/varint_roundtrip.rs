#![no_main]

use libfuzzer_sys::fuzz_target;
use pbc_wire::varint::{
    decode_varint, encode_varint, varint_len, zigzag_decode64, zigzag_encode64, MAX_VARINT_LEN,
};

// Fuzz target: varint and zigzag encode->decode roundtrip.
//
// Takes 8 bytes of fuzz input as a u64, encodes it, checks the predicted
// length, then decodes it back. The same bytes as an i64 go through zigzag.
fuzz_target!(|data: &[u8]| {
    let Some(bytes) = data.get(..8) else {
        return;
    };
    let value = u64::from_le_bytes(bytes.try_into().unwrap());

    let mut buf = [0u8; MAX_VARINT_LEN];
    let encoded_len = encode_varint(value, &mut buf);
    assert_eq!(encoded_len, varint_len(value));

    let (decoded, decoded_len) = decode_varint(&buf[..encoded_len]).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(decoded_len, encoded_len);

    let signed = value as i64;
    assert_eq!(zigzag_decode64(zigzag_encode64(signed)), signed);
});
