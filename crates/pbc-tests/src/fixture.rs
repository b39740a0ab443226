//! Message fixtures shared by the integration tests and benches.
//!
//! Each fixture is a plain Rust struct with a static [`MessageSchema`] and
//! a hand-written [`FieldAccess`] impl, the same shape generated message
//! code takes.

use std::sync::LazyLock;

use pbc_types::{FieldAccess, FieldDescriptor, FieldType, FieldValue, MessageSchema};

// ── Sample ────────────────────────────────────────────────────────────────────

static SAMPLE: LazyLock<MessageSchema> = LazyLock::new(|| {
    MessageSchema::builder("Sample")
        .field(FieldDescriptor::scalar(1, "id", FieldType::Int32).required())
        .field(FieldDescriptor::scalar(2, "name", FieldType::String))
        .field(FieldDescriptor::repeated(3, "flags", FieldType::Bool))
        .build()
        .expect("Sample schema is valid")
});

/// `{1: int32 required id, 2: string name, 3: repeated bool flags}`.
#[derive(Clone, Debug, Default)]
pub struct Sample {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub flags: Option<Vec<bool>>,
}

impl FieldAccess for Sample {
    fn schema(&self) -> &MessageSchema {
        &SAMPLE
    }

    fn field_value(&self, field: &FieldDescriptor) -> FieldValue<'_> {
        match field.number() {
            1 => FieldValue::optional(self.id),
            2 => FieldValue::optional(self.name.as_ref()),
            3 => FieldValue::optional_list(self.flags.as_ref().map(|f| f.iter().copied())),
            _ => FieldValue::Absent,
        }
    }
}

// ── Point ─────────────────────────────────────────────────────────────────────

static POINT: LazyLock<MessageSchema> = LazyLock::new(|| {
    MessageSchema::builder("Point")
        .field(FieldDescriptor::scalar(1, "x", FieldType::SInt32).raw().required())
        .field(FieldDescriptor::scalar(2, "y", FieldType::SInt32).raw().required())
        .field(FieldDescriptor::scalar(3, "label", FieldType::String))
        .build()
        .expect("Point schema is valid")
});

/// Two raw (always-present) coordinates and an optional label.
#[derive(Clone, Debug, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub label: Option<String>,
}

impl FieldAccess for Point {
    fn schema(&self) -> &MessageSchema {
        &POINT
    }

    fn field_value(&self, field: &FieldDescriptor) -> FieldValue<'_> {
        match field.number() {
            1 => FieldValue::single(self.x),
            2 => FieldValue::single(self.y),
            3 => FieldValue::optional(self.label.as_ref()),
            _ => FieldValue::Absent,
        }
    }
}

// ── AllTypes ──────────────────────────────────────────────────────────────────

/// Field number of the repeated `tags` field (first two-byte tag).
pub const TAGS_FIELD: u32 = 16;

/// Field number of the repeated `deltas` field (first three-byte tag).
pub const DELTAS_FIELD: u32 = 2048;

static ALL_TYPES: LazyLock<MessageSchema> = LazyLock::new(|| {
    let mut builder = MessageSchema::builder("AllTypes");
    for (ty, number) in FieldType::ALL.into_iter().zip(1..) {
        builder = builder.field(FieldDescriptor::scalar(number, ty.name(), ty));
    }
    builder
        .field(FieldDescriptor::repeated(TAGS_FIELD, "tags", FieldType::String))
        .field(FieldDescriptor::repeated(DELTAS_FIELD, "deltas", FieldType::SInt64))
        .build()
        .expect("AllTypes schema is valid")
});

/// One optional field per [`FieldType`], numbered 1..=15 in
/// [`FieldType::ALL`] order, plus two repeated fields with multi-byte tags.
#[derive(Clone, Debug, Default)]
pub struct AllTypes {
    pub bool_: Option<bool>,
    pub bytes: Option<Vec<u8>>,
    pub string: Option<String>,
    pub double: Option<f64>,
    pub float: Option<f32>,
    pub fixed32: Option<u32>,
    pub fixed64: Option<u64>,
    pub sfixed32: Option<i32>,
    pub sfixed64: Option<i64>,
    pub sint32: Option<i32>,
    pub sint64: Option<i64>,
    pub int32: Option<i32>,
    pub int64: Option<i64>,
    pub uint32: Option<u32>,
    pub uint64: Option<u64>,
    pub tags: Vec<String>,
    pub deltas: Vec<i64>,
}

impl AllTypes {
    /// Every field set, with negative numbers and a string long enough to
    /// need a two-byte length prefix.
    #[must_use]
    pub fn populated() -> Self {
        Self {
            bool_: Some(true),
            bytes: Some(vec![0x00, 0xFF, 0x10]),
            string: Some("é".repeat(100)),
            double: Some(-2.5),
            float: Some(3.25),
            fixed32: Some(0xDEAD_BEEF),
            fixed64: Some(u64::MAX),
            sfixed32: Some(-7),
            sfixed64: Some(i64::MIN),
            sint32: Some(-150),
            sint64: Some(1 << 40),
            int32: Some(-1),
            int64: Some(-300),
            uint32: Some(u32::MAX),
            uint64: Some(16384),
            tags: vec!["alpha".to_string(), String::new(), "gamma".to_string()],
            deltas: vec![0, -1, 1, i64::MAX],
        }
    }
}

impl FieldAccess for AllTypes {
    fn schema(&self) -> &MessageSchema {
        &ALL_TYPES
    }

    fn field_value(&self, field: &FieldDescriptor) -> FieldValue<'_> {
        match field.number() {
            1 => FieldValue::optional(self.bool_),
            2 => FieldValue::optional(self.bytes.as_ref()),
            3 => FieldValue::optional(self.string.as_ref()),
            4 => FieldValue::optional(self.double),
            5 => FieldValue::optional(self.float),
            6 => FieldValue::optional(self.fixed32),
            7 => FieldValue::optional(self.fixed64),
            8 => FieldValue::optional(self.sfixed32),
            9 => FieldValue::optional(self.sfixed64),
            10 => FieldValue::optional(self.sint32),
            11 => FieldValue::optional(self.sint64),
            12 => FieldValue::optional(self.int32),
            13 => FieldValue::optional(self.int64),
            14 => FieldValue::optional(self.uint32),
            15 => FieldValue::optional(self.uint64),
            TAGS_FIELD => FieldValue::list(&self.tags),
            DELTAS_FIELD => FieldValue::list(self.deltas.iter().copied()),
            _ => FieldValue::Absent,
        }
    }
}

/// Render bytes as space-separated lowercase hex pairs: `08 07 18 01`.
#[must_use]
pub fn hex_spaced(bytes: &[u8]) -> String {
    bytes
        .chunks(1)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}
