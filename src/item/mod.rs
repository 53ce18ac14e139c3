/// Tabular projection of records: column schemas, grids and a grid-building writer.
pub mod table;

/// XML export of records: escaping, field mappings and the XML item writer.
pub mod xml;

#[cfg(feature = "logger")]
/// This module provides a logger item writer, useful to trace listings.
pub mod logger;

#[cfg(feature = "fake")]
/// This module provides a fake item reader generating entity records.
pub mod fake;

#[cfg(feature = "json")]
/// This module provides a JSON item reader turning listing bodies into records.
pub mod json;
