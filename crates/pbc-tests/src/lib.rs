//! Integration test and benchmark harness for the PBC workspace.

pub mod fixture;

pub use fixture::{AllTypes, DELTAS_FIELD, Point, Sample, TAGS_FIELD, hex_spaced};
