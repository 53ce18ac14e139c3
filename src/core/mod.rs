/// Reader and writer traits shared by every listing component.
pub mod item;

/// Dotted-path parsing and resolution against records.
pub mod path;

/// Structural value model for records.
pub mod record;

/// Chunked reader to writer driver.
pub mod step;
