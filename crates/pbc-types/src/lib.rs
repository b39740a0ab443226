#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod error;
pub mod field_type;
pub mod message;
pub mod schema;
pub mod value;

pub use descriptor::{Cardinality, FieldDescriptor, Presence};
pub use error::SchemaError;
pub use field_type::FieldType;
pub use message::FieldAccess;
pub use schema::{MessageSchema, MessageSchemaBuilder};
pub use value::{FieldValue, Value, ValueKind};
