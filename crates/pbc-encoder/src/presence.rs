use pbc_types::{FieldDescriptor, FieldValue, Presence, Value};

/// Whether a field value counts as unset.
///
/// `Optional` fields are absent exactly when the accessor returned
/// [`FieldValue::Absent`]. `Raw` fields are never absent, whatever they
/// hold. An empty list is present; it just encodes to nothing.
#[must_use]
pub fn is_absent(value: &FieldValue<'_>, presence: Presence) -> bool {
    match presence {
        Presence::Raw => false,
        Presence::Optional => value.is_absent(),
    }
}

/// The scalar value to encode for `field`, after applying its presence rule.
///
/// Returns `None` for an absent optional field. A `Raw` field reported as
/// absent resolves to its type's zero value. Lists are not handled here.
#[must_use]
pub fn resolve_scalar<'a>(field: &FieldDescriptor, value: &FieldValue<'a>) -> Option<Value<'a>> {
    match value {
        FieldValue::Single(v) => Some(*v),
        FieldValue::Absent if field.presence() == Presence::Raw => {
            Some(field.field_type().default_value())
        }
        FieldValue::Absent | FieldValue::List(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbc_types::FieldType;

    #[test]
    fn optional_absent() {
        assert!(is_absent(&FieldValue::Absent, Presence::Optional));
        assert!(!is_absent(&FieldValue::single(0i32), Presence::Optional));
    }

    #[test]
    fn raw_never_absent() {
        assert!(!is_absent(&FieldValue::Absent, Presence::Raw));
        assert!(!is_absent(&FieldValue::single(0i32), Presence::Raw));
    }

    #[test]
    fn empty_list_is_present() {
        assert!(!is_absent(&FieldValue::List(Vec::new()), Presence::Optional));
    }

    #[test]
    fn raw_absent_resolves_to_zero() {
        let field = FieldDescriptor::scalar(1, "count", FieldType::UInt64).raw();
        assert_eq!(resolve_scalar(&field, &FieldValue::Absent), Some(Value::U64(0)));
    }

    #[test]
    fn optional_absent_resolves_to_none() {
        let field = FieldDescriptor::scalar(1, "count", FieldType::UInt64);
        assert_eq!(resolve_scalar(&field, &FieldValue::Absent), None);
        assert_eq!(
            resolve_scalar(&field, &FieldValue::single(9u64)),
            Some(Value::U64(9))
        );
    }
}
