use std::fmt;
use std::str::FromStr;

use pbc_wire::WireType;

use crate::error::SchemaError;
use crate::value::{Value, ValueKind};

/// The closed set of scalar field types the codec understands.
///
/// Each variant fixes three things: the wire type written into its tag,
/// the Rust representation its values carry, and a canonical lowercase
/// name (the `.proto` keyword).
///
/// ```text
/// ┌──────────┬─────────────────┬──────────┬──────────────────────────┐
/// │ Type     │ Wire type       │ Value    │ Payload                  │
/// ├──────────┼─────────────────┼──────────┼──────────────────────────┤
/// │ bool     │ Varint (0)      │ bool     │ 1 byte                   │
/// │ int32    │ Varint (0)      │ i32      │ sign-extended varint     │
/// │ int64    │ Varint (0)      │ i64      │ varint                   │
/// │ uint32   │ Varint (0)      │ u32      │ varint                   │
/// │ uint64   │ Varint (0)      │ u64      │ varint                   │
/// │ sint32   │ Varint (0)      │ i32      │ zig-zag varint           │
/// │ sint64   │ Varint (0)      │ i64      │ zig-zag varint           │
/// │ fixed64  │ Fixed64 (1)     │ u64      │ 8 bytes LE               │
/// │ sfixed64 │ Fixed64 (1)     │ i64      │ 8 bytes LE               │
/// │ double   │ Fixed64 (1)     │ f64      │ 8 bytes LE               │
/// │ string   │ Length (2)      │ &str     │ varint len + UTF-8       │
/// │ bytes    │ Length (2)      │ &[u8]    │ varint len + raw bytes   │
/// │ fixed32  │ Fixed32 (5)     │ u32      │ 4 bytes LE               │
/// │ sfixed32 │ Fixed32 (5)     │ i32      │ 4 bytes LE               │
/// │ float    │ Fixed32 (5)     │ f32      │ 4 bytes LE               │
/// └──────────┴─────────────────┴──────────┴──────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Bytes,
    String,
    Double,
    Float,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    SInt32,
    SInt64,
    Int32,
    Int64,
    UInt32,
    UInt64,
}

impl FieldType {
    /// Every variant, in declaration order.
    pub const ALL: [FieldType; 15] = [
        Self::Bool,
        Self::Bytes,
        Self::String,
        Self::Double,
        Self::Float,
        Self::Fixed32,
        Self::Fixed64,
        Self::SFixed32,
        Self::SFixed64,
        Self::SInt32,
        Self::SInt64,
        Self::Int32,
        Self::Int64,
        Self::UInt32,
        Self::UInt64,
    ];

    /// Wire type bits written into this field's tag.
    #[must_use]
    pub fn wire_type(self) -> WireType {
        match self {
            Self::Bool
            | Self::Int32
            | Self::Int64
            | Self::UInt32
            | Self::UInt64
            | Self::SInt32
            | Self::SInt64 => WireType::Varint,
            Self::Double | Self::Fixed64 | Self::SFixed64 => WireType::Fixed64,
            Self::String | Self::Bytes => WireType::LengthDelimited,
            Self::Float | Self::Fixed32 | Self::SFixed32 => WireType::Fixed32,
        }
    }

    /// The value representation this type carries.
    #[must_use]
    pub fn value_kind(self) -> ValueKind {
        match self {
            Self::Bool => ValueKind::Bool,
            Self::Int32 | Self::SInt32 | Self::SFixed32 => ValueKind::I32,
            Self::UInt32 | Self::Fixed32 => ValueKind::U32,
            Self::Int64 | Self::SInt64 | Self::SFixed64 => ValueKind::I64,
            Self::UInt64 | Self::Fixed64 => ValueKind::U64,
            Self::Float => ValueKind::F32,
            Self::Double => ValueKind::F64,
            Self::String => ValueKind::Str,
            Self::Bytes => ValueKind::Bytes,
        }
    }

    /// Canonical lowercase name, as written in a `.proto` file.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::String => "string",
            Self::Double => "double",
            Self::Float => "float",
            Self::Fixed32 => "fixed32",
            Self::Fixed64 => "fixed64",
            Self::SFixed32 => "sfixed32",
            Self::SFixed64 => "sfixed64",
            Self::SInt32 => "sint32",
            Self::SInt64 => "sint64",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
        }
    }

    /// `true` for every type except `string` and `bytes`.
    ///
    /// Only primitive types may use [`Presence::Raw`](crate::Presence::Raw).
    #[must_use]
    pub fn is_primitive(self) -> bool {
        !matches!(self, Self::String | Self::Bytes)
    }

    /// The zero value for this type: `false`, `0`, `0.0`, `""` or `b""`.
    #[must_use]
    pub fn default_value(self) -> Value<'static> {
        match self.value_kind() {
            ValueKind::Bool => Value::Bool(false),
            ValueKind::I32 => Value::I32(0),
            ValueKind::I64 => Value::I64(0),
            ValueKind::U32 => Value::U32(0),
            ValueKind::U64 => Value::U64(0),
            ValueKind::F32 => Value::F32(0.0),
            ValueKind::F64 => Value::F64(0.0),
            ValueKind::Str => Value::Str(""),
            ValueKind::Bytes => Value::Bytes(&[]),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    /// Look a type up by its canonical name. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SchemaError::UnknownFieldType {
                name: s.to_string(),
            })
    }
}
