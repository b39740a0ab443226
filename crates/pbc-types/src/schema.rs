use std::collections::HashSet;

use pbc_wire::MAX_FIELD_NUMBER;

use crate::descriptor::{FieldDescriptor, Presence};
use crate::error::SchemaError;

/// A validated, ordered set of field descriptors for one message type.
///
/// Fields are kept sorted by ascending field number, which is the order
/// the encoder validates and writes them in. A schema is built once
/// (typically into a `static` or an `Arc`) and only read afterwards.
///
/// # Usage
///
/// ```rust
/// use pbc_types::{FieldDescriptor, FieldType, MessageSchema};
///
/// let schema = MessageSchema::builder("Sample")
///     .field(FieldDescriptor::scalar(1, "id", FieldType::Int32).required())
///     .field(FieldDescriptor::scalar(2, "name", FieldType::String))
///     .field(FieldDescriptor::repeated(3, "flags", FieldType::Bool))
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.fields().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageSchema {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl MessageSchema {
    /// Start building a schema for the message called `name`.
    pub fn builder(name: impl Into<String>) -> MessageSchemaBuilder {
        MessageSchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields, ascending by field number.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look a field up by number.
    #[must_use]
    pub fn field(&self, number: u32) -> Option<&FieldDescriptor> {
        self.fields
            .binary_search_by_key(&number, FieldDescriptor::number)
            .ok()
            .map(|i| &self.fields[i])
    }

    /// Look a field up by name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Required fields, ascending by field number.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_required())
    }
}

/// Accumulates descriptors for a [`MessageSchema`].
///
/// Fields may be added in any order; `build()` sorts and validates them.
#[derive(Debug)]
pub struct MessageSchemaBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl MessageSchemaBuilder {
    #[must_use]
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Validate the collected fields and produce the schema.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::InvalidFieldNumber`] for 0 or numbers above 2^29 - 1.
    /// - [`SchemaError::DuplicateFieldNumber`] / [`SchemaError::DuplicateFieldName`].
    /// - [`SchemaError::RawPresenceNotAllowed`] when `Raw` presence is used
    ///   on a repeated, `string` or `bytes` field.
    pub fn build(mut self) -> Result<MessageSchema, SchemaError> {
        self.fields.sort_by_key(FieldDescriptor::number);

        let mut names = HashSet::with_capacity(self.fields.len());
        let mut previous: Option<u32> = None;

        for field in &self.fields {
            let number = field.number();
            if number == 0 || number > MAX_FIELD_NUMBER {
                return Err(SchemaError::InvalidFieldNumber {
                    name: field.name().to_string(),
                    number,
                });
            }
            if previous == Some(number) {
                return Err(SchemaError::DuplicateFieldNumber { number });
            }
            previous = Some(number);

            if !names.insert(field.name()) {
                return Err(SchemaError::DuplicateFieldName {
                    name: field.name().to_string(),
                });
            }

            if field.presence() == Presence::Raw
                && (field.is_repeated() || !field.field_type().is_primitive())
            {
                return Err(SchemaError::RawPresenceNotAllowed {
                    name: field.name().to_string(),
                    field_type: field.field_type(),
                });
            }
        }

        Ok(MessageSchema {
            name: self.name,
            fields: self.fields,
        })
    }
}
