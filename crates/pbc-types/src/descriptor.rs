use pbc_wire::{WireType, make_tag};

use crate::field_type::FieldType;

/// Whether a field holds one value or a sequence of values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cardinality {
    #[default]
    Scalar,
    /// Encoded unpacked: one tagged unit per element.
    Repeated,
}

/// How absence is represented for a field.
///
/// ```text
/// ┌──────────┬────────────────────────────────────────────────────────┐
/// │ Presence │ Meaning                                                │
/// ├──────────┼────────────────────────────────────────────────────────┤
/// │ Optional │ The field may be unset. `FieldValue::Absent` skips it  │
/// │          │ and fails a required check.                            │
/// │ Raw      │ Plain primitive storage. Never absent: an accessor     │
/// │          │ returning `Absent` is read as the type's zero value.   │
/// └──────────┴────────────────────────────────────────────────────────┘
/// ```
///
/// `Raw` is only valid for scalar primitive fields; [`MessageSchema`]
/// construction rejects it elsewhere.
///
/// [`MessageSchema`]: crate::MessageSchema
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Optional,
    Raw,
}

/// Immutable metadata for one message field.
///
/// Built with [`FieldDescriptor::scalar`] or [`FieldDescriptor::repeated`]
/// plus the chained `required()` / `raw()` modifiers, then handed to a
/// [`MessageSchema`](crate::MessageSchema) builder which validates it.
/// There are no setters; once in a schema a descriptor is read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    number: u32,
    name: String,
    field_type: FieldType,
    cardinality: Cardinality,
    required: bool,
    presence: Presence,
}

impl FieldDescriptor {
    /// A singular, optional field.
    pub fn scalar(number: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            number,
            name: name.into(),
            field_type,
            cardinality: Cardinality::Scalar,
            required: false,
            presence: Presence::Optional,
        }
    }

    /// A repeated field.
    pub fn repeated(number: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            cardinality: Cardinality::Repeated,
            ..Self::scalar(number, name, field_type)
        }
    }

    /// Mark the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Use raw primitive storage: the field is always present.
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.presence = Presence::Raw;
        self
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn presence(&self) -> Presence {
        self.presence
    }

    #[must_use]
    pub fn wire_type(&self) -> WireType {
        self.field_type.wire_type()
    }

    /// The tag written before each of this field's values.
    #[must_use]
    pub fn tag(&self) -> u32 {
        make_tag(self.number, self.wire_type())
    }
}
