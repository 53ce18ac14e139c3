//! XML export of record lists.
//!
//! Records are laid out by a [`FieldMapping`]: an ordered list of leaf entries
//! (`<tag>value</tag>`) and nested entries that wrap a sub-object in a
//! container element. Containers whose sub-object is missing from a record are
//! left out entirely. Text is escaped with [`escape`] before it is written,
//! and the document is produced with `quick-xml` using a fixed two-space
//! indentation.
//!
//! # Examples
//!
//! ```
//! use entity_listing::core::record::Record;
//! use entity_listing::item::xml::{to_xml, FieldMapping};
//!
//! let mapping = FieldMapping::builder()
//!     .leaf("id", "id")
//!     .leaf("name", "name")
//!     .nested("customerCategory", "customerCategory", |category| {
//!         category.leaf("code", "code").leaf("description", "description")
//!     })
//!     .build()
//!     .unwrap();
//!
//! let customers = vec![
//!     Record::from_json_str(r#"{"id": 1, "name": "A & B"}"#).unwrap(),
//!     Record::from_json_str(
//!         r#"{"id": 2, "name": "Globex", "customerCategory": {"code": "GOLD", "description": "Gold"}}"#,
//!     )
//!     .unwrap(),
//! ];
//!
//! let xml = to_xml(Some(customers.as_slice()), "customer", &mapping).unwrap();
//!
//! assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<customers>"));
//! assert!(xml.contains("<name>A &amp; B</name>"));
//! assert_eq!(xml.matches("<customerCategory>").count(), 1);
//! ```

pub mod escape;
pub mod mapping;
pub mod xml_writer;

pub use escape::{escape, unescape};
pub use mapping::{FieldMapping, FieldMappingBuilder, MappingEntry, is_valid_tag};
pub use xml_writer::{XmlItemWriter, XmlItemWriterBuilder, plural, to_xml};
