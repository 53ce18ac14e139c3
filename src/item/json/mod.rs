//! JSON input for record listings.
//!
//! Listing bodies arrive as a JSON array of objects, or as `null` when the
//! upstream source has nothing to return. [`JsonRecordReader`] turns such a
//! body into [`Record`](crate::core::record::Record)s, one per array element,
//! so they can be fed to the table projection or the XML export.
//!
//! # Examples
//!
//! ```
//! use entity_listing::core::item::ItemReader;
//! use entity_listing::core::path::resolve;
//! use entity_listing::item::json::JsonRecordReaderBuilder;
//! use std::io::Cursor;
//!
//! let body = r#"[
//!   {"id": 1, "name": "Acme", "customerCategory": {"code": "GOLD", "description": "Gold"}},
//!   {"id": 2, "name": "Globex", "customerCategory": null}
//! ]"#;
//!
//! let reader = JsonRecordReaderBuilder::new()
//!     .capacity(1024)
//!     .from_reader(Cursor::new(body));
//!
//! let mut customers = Vec::new();
//! while let Some(customer) = reader.read().unwrap() {
//!     customers.push(customer);
//! }
//!
//! assert_eq!(customers.len(), 2);
//! assert_eq!(resolve(Some(&customers[0]), "customerCategory.code"), "GOLD");
//! assert_eq!(resolve(Some(&customers[1]), "customerCategory.code"), "");
//! ```

pub mod json_reader;

pub use json_reader::{JsonRecordReader, JsonRecordReaderBuilder};
