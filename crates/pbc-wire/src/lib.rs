#![warn(clippy::pedantic)]

pub mod error;
pub mod output;
pub mod tag;
pub mod varint;

pub use error::WireError;
pub use output::CodedOutput;
pub use tag::{MAX_FIELD_NUMBER, WireType, make_tag, split_tag};
