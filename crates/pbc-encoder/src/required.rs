use pbc_types::{FieldAccess, FieldDescriptor, FieldValue};

use crate::config::RequiredCheck;
use crate::error::EncodeError;
use crate::presence::is_absent;

/// Fail with [`EncodeError::UninitializedMessage`] if `field` is absent.
///
/// No-op for present fields, including empty lists and `Raw` fields.
///
/// # Errors
///
/// [`EncodeError::UninitializedMessage`] naming `field` when it is absent.
pub fn check_required(value: &FieldValue<'_>, field: &FieldDescriptor) -> Result<(), EncodeError> {
    if is_absent(value, field.presence()) {
        log::debug!("required field {:?} (#{}) is absent", field.name(), field.number());
        return Err(EncodeError::UninitializedMessage {
            missing: vec![field.name().to_string()],
        });
    }
    Ok(())
}

/// Check every required field of `message`, in field-number order.
///
/// With [`RequiredCheck::FailFast`] the first absent field is reported and
/// the rest are not looked at. With [`RequiredCheck::Aggregate`] all
/// absent fields are collected into one error.
///
/// # Errors
///
/// [`EncodeError::UninitializedMessage`] listing the missing field names in
/// field-number order.
pub fn check_message<M: FieldAccess + ?Sized>(
    message: &M,
    mode: RequiredCheck,
) -> Result<(), EncodeError> {
    let mut missing = Vec::new();

    for field in message.schema().required_fields() {
        let value = message.field_value(field);
        match (check_required(&value, field), mode) {
            (Ok(()), _) => {}
            (Err(err), RequiredCheck::FailFast) => return Err(err),
            (Err(_), RequiredCheck::Aggregate) => missing.push(field.name().to_string()),
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EncodeError::UninitializedMessage { missing })
    }
}
