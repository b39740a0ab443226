use std::io::Write;

use pbc_types::{FieldDescriptor, FieldType, FieldValue, Value};
use pbc_wire::CodedOutput;

use crate::error::EncodeError;
use crate::presence::resolve_scalar;
use crate::size::mismatch;

/// Write one tagged value: `tag (varint) │ payload`.
///
/// `None` writes nothing. The value's representation is checked against
/// `field_type` before the tag goes out, so a mismatch leaves the sink
/// untouched.
///
/// # Errors
///
/// - [`EncodeError::TypeMismatch`] when the value's kind does not match
///   `field_type`; nothing is written.
/// - [`EncodeError::Wire`] when the sink fails. Bytes already accepted for
///   this unit stay in the sink.
///
/// Wire layout per type:
///
/// ```text
/// ┌──────────────────────────┬──────────────┬────────────────────────────┐
/// │ Type                     │ Wire type    │ Payload                    │
/// ├──────────────────────────┼──────────────┼────────────────────────────┤
/// │ bool                     │ 0            │ 0x00 / 0x01                │
/// │ int32                    │ 0            │ varint(sign-extend to 64)  │
/// │ int64 / uint32 / uint64  │ 0            │ varint                     │
/// │ sint32 / sint64          │ 0            │ varint(zigzag)             │
/// │ fixed64/sfixed64/double  │ 1            │ 8 bytes LE                 │
/// │ string / bytes           │ 2            │ varint(len) + bytes        │
/// │ fixed32/sfixed32/float   │ 5            │ 4 bytes LE                 │
/// └──────────────────────────┴──────────────┴────────────────────────────┘
/// ```
pub fn write_scalar<W: Write>(
    out: &mut CodedOutput<W>,
    field_number: u32,
    field_type: FieldType,
    value: Option<&Value<'_>>,
) -> Result<(), EncodeError> {
    let Some(value) = value else {
        return Ok(());
    };

    if value.kind() != field_type.value_kind() {
        return Err(mismatch(field_number, field_type, value));
    }

    out.write_tag(field_number, field_type.wire_type())?;

    match (field_type, *value) {
        (FieldType::Bool, Value::Bool(v)) => out.write_bool(v)?,

        (FieldType::Int32, Value::I32(v)) => out.write_int32(v)?,
        (FieldType::SInt32, Value::I32(v)) => out.write_sint32(v)?,
        (FieldType::SFixed32, Value::I32(v)) => out.write_fixed32(v as u32)?,
        (FieldType::UInt32, Value::U32(v)) => out.write_varint(u64::from(v))?,
        (FieldType::Fixed32, Value::U32(v)) => out.write_fixed32(v)?,
        (FieldType::Float, Value::F32(v)) => out.write_fixed32(v.to_bits())?,

        (FieldType::Int64, Value::I64(v)) => out.write_int64(v)?,
        (FieldType::SInt64, Value::I64(v)) => out.write_sint64(v)?,
        (FieldType::SFixed64, Value::I64(v)) => out.write_fixed64(v as u64)?,
        (FieldType::UInt64, Value::U64(v)) => out.write_varint(v)?,
        (FieldType::Fixed64, Value::U64(v)) => out.write_fixed64(v)?,
        (FieldType::Double, Value::F64(v)) => out.write_fixed64(v.to_bits())?,

        // string and bytes share the length-delimited framing
        (FieldType::String, Value::Str(s)) => out.write_length_delimited(s.as_bytes())?,
        (FieldType::Bytes, Value::Bytes(b)) => out.write_length_delimited(b)?,

        // kinds were checked above
        _ => unreachable!("value kind {} checked against {field_type}", value.kind()),
    }

    Ok(())
}

/// Write a repeated field, unpacked: one tagged unit per element.
///
/// `None` or an empty slice writes nothing. Elements go out in slice
/// order. Every element is type-checked before the first byte is written.
///
/// # Errors
///
/// - [`EncodeError::TypeMismatch`] for the first mismatched element, before
///   any byte is written.
/// - [`EncodeError::Wire`] when the sink fails; later elements are not
///   attempted.
pub fn write_list<W: Write>(
    out: &mut CodedOutput<W>,
    field_number: u32,
    field_type: FieldType,
    values: Option<&[Value<'_>]>,
) -> Result<(), EncodeError> {
    let Some(values) = values else {
        return Ok(());
    };

    let expected = field_type.value_kind();
    if let Some(bad) = values.iter().find(|v| v.kind() != expected) {
        return Err(mismatch(field_number, field_type, bad));
    }

    for value in values {
        write_scalar(out, field_number, field_type, Some(value))?;
    }
    Ok(())
}

/// Write one field according to its descriptor.
///
/// Dispatches to [`write_list`] for repeated fields and [`write_scalar`]
/// otherwise, applying the field's presence rule.
///
/// # Errors
///
/// [`EncodeError::CardinalityMismatch`] when the value's shape contradicts
/// the descriptor, plus anything [`write_scalar`] or [`write_list`] return.
pub fn write_field<W: Write>(
    out: &mut CodedOutput<W>,
    field: &FieldDescriptor,
    value: &FieldValue<'_>,
) -> Result<(), EncodeError> {
    let number = field.number();
    let field_type = field.field_type();

    match (field.is_repeated(), value) {
        (true, FieldValue::List(values)) => write_list(out, number, field_type, Some(values.as_slice())),
        (true, FieldValue::Absent) => Ok(()),
        (false, FieldValue::Absent | FieldValue::Single(_)) => {
            write_scalar(out, number, field_type, resolve_scalar(field, value).as_ref())
        }
        (true, FieldValue::Single(_)) | (false, FieldValue::List(_)) => {
            Err(EncodeError::CardinalityMismatch {
                field_number: number,
                expected: field.cardinality(),
            })
        }
    }
}
