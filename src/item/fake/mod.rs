//! Generators of plausible entity records, useful for demos and load tests.

pub mod entity_reader;

pub use entity_reader::{EntityReader, EntityReaderBuilder};
