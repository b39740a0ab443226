use std::fmt;

/// One borrowed scalar value, as handed to the codec by a message accessor.
///
/// Text and byte payloads borrow from the message; nothing here outlives
/// a single encode call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(&'a str),
    Bytes(&'a [u8]),
}

/// The representation tag of a [`Value`], used to check a value against
/// its field type before anything is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    Str,
    Bytes,
}

impl Value<'_> {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Str(_) => ValueKind::Str,
            Self::Bytes(_) => ValueKind::Bytes,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Str => "str",
            Self::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )+
    };
}

value_from! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Self::Str(v.as_str())
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(v: &'a [u8]) -> Self {
        Self::Bytes(v)
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(v: &'a Vec<u8>) -> Self {
        Self::Bytes(v.as_slice())
    }
}

/// The current value of one field of a message.
///
/// `Absent` is distinct from a present zero: an `Optional` field holding
/// `Single(Value::I32(0))` is written, an `Absent` one is skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue<'a> {
    #[default]
    Absent,
    Single(Value<'a>),
    List(Vec<Value<'a>>),
}

impl<'a> FieldValue<'a> {
    /// Wrap an optional scalar: `None` becomes `Absent`.
    pub fn optional<T: Into<Value<'a>>>(value: Option<T>) -> Self {
        value.map_or(Self::Absent, |v| Self::Single(v.into()))
    }

    /// Wrap a present scalar.
    pub fn single<T: Into<Value<'a>>>(value: T) -> Self {
        Self::Single(value.into())
    }

    /// Collect a present list. An empty iterator gives an empty (present) list.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Wrap an optional list: `None` becomes `Absent`.
    pub fn optional_list<I>(values: Option<I>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        values.map_or(Self::Absent, Self::list)
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}
