#![warn(clippy::pedantic)]

pub mod config;
pub mod encoder;
pub mod error;
pub mod presence;
pub mod required;
pub mod size;
pub mod writer;

pub use config::{EncoderConfig, RequiredCheck, SizingMode};
pub use encoder::MessageEncoder;
pub use error::EncodeError;
pub use presence::is_absent;
pub use required::{check_message, check_required};
pub use size::{size_of_field, size_of_list, size_of_scalar};
pub use writer::{write_field, write_list, write_scalar};
