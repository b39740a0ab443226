#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use pbc_encoder::{size_of_field, write_field, SizingMode};
use pbc_types::{FieldDescriptor, FieldType, FieldValue, Value};
use pbc_wire::{CodedOutput, MAX_FIELD_NUMBER};

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl FuzzValue {
    fn as_value(&self) -> Value<'_> {
        match self {
            Self::Bool(v) => Value::Bool(*v),
            Self::I32(v) => Value::I32(*v),
            Self::I64(v) => Value::I64(*v),
            Self::U32(v) => Value::U32(*v),
            Self::U64(v) => Value::U64(*v),
            Self::F32(v) => Value::F32(*v),
            Self::F64(v) => Value::F64(*v),
            Self::Str(s) => Value::Str(s),
            Self::Bytes(b) => Value::Bytes(b),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    type_id: u8,
    field_number: u32,
    repeated: bool,
    values: Vec<FuzzValue>,
}

// Fuzz target: exact size vs written bytes for one field.
//
// Builds a descriptor from arbitrary input and feeds it arbitrary values,
// which may not match the field type. Whenever sizing succeeds the writer
// must succeed too and emit exactly that many bytes; whenever sizing
// rejects the value the writer must reject it without writing.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = FuzzInput::arbitrary(&mut u) else {
        return;
    };

    let field_type = FieldType::ALL[usize::from(input.type_id) % FieldType::ALL.len()];
    let field_number = input.field_number % MAX_FIELD_NUMBER + 1;
    let values: Vec<Value<'_>> = input.values.iter().take(64).map(FuzzValue::as_value).collect();

    let (field, value) = if input.repeated {
        (
            FieldDescriptor::repeated(field_number, "f", field_type),
            FieldValue::List(values),
        )
    } else {
        (
            FieldDescriptor::scalar(field_number, "f", field_type),
            values.first().copied().map_or(FieldValue::Absent, FieldValue::Single),
        )
    };

    let mut out = CodedOutput::new(Vec::new());
    match size_of_field(&field, &value, SizingMode::Exact) {
        Ok(size) => {
            write_field(&mut out, &field, &value).unwrap();
            assert_eq!(out.bytes_written(), size);
        }
        Err(_) => {
            assert!(write_field(&mut out, &field, &value).is_err());
            assert_eq!(out.bytes_written(), 0);
        }
    }
});
