use pbc_types::{FieldDescriptor, FieldType, FieldValue, Value};
use pbc_wire::tag::tag_len;
use pbc_wire::varint::{varint_len, zigzag_encode32, zigzag_encode64};

use crate::config::SizingMode;
use crate::error::EncodeError;
use crate::presence::resolve_scalar;

/// Payload size of one value, excluding its tag.
///
/// Returns `None` when the value's representation does not match
/// `field_type` (e.g. a `Value::Str` for an `int32` field).
///
/// ```text
/// ┌──────────────────────────────┬──────────────────┬────────────┐
/// │ Type                         │ Exact            │ Legacy     │
/// ├──────────────────────────────┼──────────────────┼────────────┤
/// │ bool                         │ 1                │ 1          │
/// │ int32                        │ 1–5, 10 if < 0   │ 4          │
/// │ uint32 / sint32              │ 1–5              │ 4          │
/// │ int64 / uint64 / sint64      │ 1–10             │ 8          │
/// │ fixed32 / sfixed32 / float   │ 4                │ 4          │
/// │ fixed64 / sfixed64 / double  │ 8                │ 8          │
/// │ string / bytes               │ varint(len)+len  │ same       │
/// └──────────────────────────────┴──────────────────┴────────────┘
/// ```
#[must_use]
pub fn size_of_scalar(value: &Value<'_>, field_type: FieldType, mode: SizingMode) -> Option<usize> {
    let exact = mode == SizingMode::Exact;
    let size = match (field_type, value) {
        (FieldType::Bool, Value::Bool(_)) => 1,

        (FieldType::Int32, Value::I32(v)) if exact => varint_len(i64::from(*v) as u64),
        (FieldType::SInt32, Value::I32(v)) if exact => varint_len(u64::from(zigzag_encode32(*v))),
        (FieldType::UInt32, Value::U32(v)) if exact => varint_len(u64::from(*v)),
        (FieldType::Int32 | FieldType::SInt32 | FieldType::SFixed32, Value::I32(_))
        | (FieldType::UInt32 | FieldType::Fixed32, Value::U32(_))
        | (FieldType::Float, Value::F32(_)) => 4,

        (FieldType::Int64, Value::I64(v)) if exact => varint_len(*v as u64),
        (FieldType::SInt64, Value::I64(v)) if exact => varint_len(zigzag_encode64(*v)),
        (FieldType::UInt64, Value::U64(v)) if exact => varint_len(*v),
        (FieldType::Int64 | FieldType::SInt64 | FieldType::SFixed64, Value::I64(_))
        | (FieldType::UInt64 | FieldType::Fixed64, Value::U64(_))
        | (FieldType::Double, Value::F64(_)) => 8,

        (FieldType::String, Value::Str(s)) => delimited_len(s.len()),
        (FieldType::Bytes, Value::Bytes(b)) => delimited_len(b.len()),

        _ => return None,
    };
    Some(size)
}

/// Size of a repeated field: every element's payload plus one tag each.
///
/// In `Exact` mode each tag costs its real varint length; in `Legacy` mode
/// each costs one byte. An absent or empty list is 0.
///
/// # Errors
///
/// [`EncodeError::TypeMismatch`] for the first element whose kind does
/// not match `field_type`.
pub fn size_of_list(
    field_number: u32,
    values: Option<&[Value<'_>]>,
    field_type: FieldType,
    mode: SizingMode,
) -> Result<usize, EncodeError> {
    let Some(values) = values else {
        return Ok(0);
    };

    let per_tag = match mode {
        SizingMode::Exact => tag_len(field_number),
        SizingMode::Legacy => 1,
    };

    let mut size = 0;
    for value in values {
        size += size_of_scalar(value, field_type, mode)
            .ok_or_else(|| mismatch(field_number, field_type, value))?;
    }
    Ok(size + values.len() * per_tag)
}

/// Total on-wire size of one field, tags included.
///
/// Absent optional fields are 0. Scalar fields are always sized exactly;
/// `mode` only changes how repeated fields are counted.
///
/// # Errors
///
/// - [`EncodeError::CardinalityMismatch`] when a list is given for a scalar
///   field or a single value for a repeated one.
/// - [`EncodeError::TypeMismatch`] when a value's kind does not match the
///   field type.
pub fn size_of_field(
    field: &FieldDescriptor,
    value: &FieldValue<'_>,
    mode: SizingMode,
) -> Result<usize, EncodeError> {
    let number = field.number();
    let field_type = field.field_type();

    if field.is_repeated() {
        return match value {
            FieldValue::Absent => Ok(0),
            FieldValue::List(values) => size_of_list(number, Some(values.as_slice()), field_type, mode),
            FieldValue::Single(_) => Err(EncodeError::CardinalityMismatch {
                field_number: number,
                expected: field.cardinality(),
            }),
        };
    }

    if matches!(value, FieldValue::List(_)) {
        return Err(EncodeError::CardinalityMismatch {
            field_number: number,
            expected: field.cardinality(),
        });
    }

    let Some(scalar) = resolve_scalar(field, value) else {
        return Ok(0);
    };
    let payload = size_of_scalar(&scalar, field_type, SizingMode::Exact)
        .ok_or_else(|| mismatch(number, field_type, &scalar))?;
    Ok(tag_len(number) + payload)
}

fn delimited_len(len: usize) -> usize {
    varint_len(len as u64) + len
}

pub(crate) fn mismatch(field_number: u32, field_type: FieldType, value: &Value<'_>) -> EncodeError {
    EncodeError::TypeMismatch {
        field_number,
        field_type,
        found: value.kind(),
    }
}
