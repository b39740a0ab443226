use crate::descriptor::FieldDescriptor;
use crate::schema::MessageSchema;
use crate::value::FieldValue;

/// Read access to a message's fields, as seen by the encoder.
///
/// This is the seam between a concrete message type (hand-written or
/// generated) and the codec. The encoder walks `schema().fields()` in
/// order and asks for each field's current value.
///
/// ```rust
/// use std::sync::LazyLock;
///
/// use pbc_types::{FieldAccess, FieldDescriptor, FieldType, FieldValue, MessageSchema};
///
/// static POINT: LazyLock<MessageSchema> = LazyLock::new(|| {
///     MessageSchema::builder("Point")
///         .field(FieldDescriptor::scalar(1, "x", FieldType::SInt32).raw())
///         .field(FieldDescriptor::scalar(2, "y", FieldType::SInt32).raw())
///         .build()
///         .unwrap()
/// });
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl FieldAccess for Point {
///     fn schema(&self) -> &MessageSchema {
///         &POINT
///     }
///
///     fn field_value(&self, field: &FieldDescriptor) -> FieldValue<'_> {
///         match field.number() {
///             1 => FieldValue::single(self.x),
///             2 => FieldValue::single(self.y),
///             _ => FieldValue::Absent,
///         }
///     }
/// }
/// ```
pub trait FieldAccess {
    /// The schema describing this message's fields.
    fn schema(&self) -> &MessageSchema;

    /// The current value of `field`.
    ///
    /// Repeated fields return `FieldValue::List` (or `Absent`); scalar
    /// fields return `FieldValue::Single` (or `Absent`).
    fn field_value(&self, field: &FieldDescriptor) -> FieldValue<'_>;
}
