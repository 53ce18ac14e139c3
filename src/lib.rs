#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Entity Listing for Rust

 A toolkit for showing lists of business records (customers, employees,
 suppliers) as tables and exporting them as XML documents. Records come from a
 remote listing API as JSON objects of arbitrary shape, flat or with one level
 of nested sub-objects; the crate never assumes a fixed schema.

 ## Core Concepts

- **Record:** A string-keyed map of JSON-like values. Every listing is a list of `Record`s.
- **FieldPath:** A dotted path such as `customerCategory.code` that reaches into nested sub-objects. Resolution never fails: anything missing renders as an empty string.
- **TableSchema:** An ordered list of columns, each pairing a header label with a field path. Projecting records through a schema yields a `Grid` of display strings.
- **FieldMapping:** The XML layout of one record: leaf elements plus nested containers. Containers whose sub-object is missing are left out.
- **ItemReader / ItemWriter:** The seams through which records are fetched and written, driven chunk by chunk by a `Step`.

 ## Features

| **Feature** | **Description**                                                    |
|-------------|--------------------------------------------------------------------|
| json        | Enables the JSON `ItemReader` for listing bodies                   |
| logger      | Enables a logger `ItemWriter`, useful for debugging purposes       |
| fake        | Enables a fake `ItemReader` generating customers, employees and suppliers |
| full        | Enables all available features                                     |

Table projection, XML export and the entity layouts are always available.

 ## Getting Started

```toml
[dependencies]
entity-listing-rs = { version = "<version>", features = ["<full|json|fake|logger>"] }
```

```rust
# use entity_listing::{
#     core::{
#         record::Record,
#         step::{StepBuilder, StepStatus},
#     },
#     entity::EntityKind,
#     error::ListingError,
#     export::{DirectorySaver, XmlExporter},
#     item::{json::JsonRecordReaderBuilder, table::TableItemWriter},
# };
# use std::env::temp_dir;
fn main() -> Result<(), ListingError> {
    let body = r#"[
        {"id": 1, "name": "Acme", "address": "1 Main St", "email": "info@acme.test",
         "phone": "555-0100", "iban": "FR76", "customerCategory": {"code": "GOLD", "description": "Gold"}},
        {"id": 2, "name": "Globex", "address": "2 Side St", "email": "hello@globex.test",
         "phone": "555-0101", "iban": "DE89"}
    ]"#;

    let kind = EntityKind::Customer;
    let reader = JsonRecordReaderBuilder::new().from_reader(body.as_bytes());
    let writer = TableItemWriter::new(kind.columns()?);

    let step = StepBuilder::new().reader(&reader).writer(&writer).chunk(10).build()?;
    let result = step.execute();
    assert_eq!(result.status, StepStatus::Success);

    let grid = writer.grid();
    assert_eq!(grid.text(0, "categoryCode"), Some("GOLD"));
    assert_eq!(grid.text(1, "categoryCode"), Some(""));
    println!("{}", grid);

    let records = vec![
        Record::from_json_str(r#"{"id": 1, "name": "A & B"}"#)?,
    ];
    let exporter = XmlExporter::for_kind(kind)?;
    let path = exporter.export(&records, &DirectorySaver::new(temp_dir()))?;
    assert!(path.ends_with("customers.xml"));

    Ok(())
}
```
*/

/// Core module for records, paths, reader/writer traits and steps
pub mod core;

/// Error types for listing operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of items readers / writers (for example: table, xml, json, fake)
pub mod item;

/// Customers, employees and suppliers with their table and XML layouts
pub mod entity;

/// XML export of loaded listings
pub mod export;
