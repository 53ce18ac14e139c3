//! Table projection of heterogeneous records.
//!
//! A [`TableSchema`] is an ordered list of [`Column`]s, each pairing an id and
//! a header label with a dotted field path. Projecting a record list through a
//! schema resolves every path against every record and yields a [`Grid`] of
//! display strings. Projection never fails: missing fields, `null` values and
//! unexpected shapes all render as empty cells.
//!
//! # Examples
//!
//! ```
//! use entity_listing::core::record::Record;
//! use entity_listing::item::table::{project, Column, DisplayHint, TableSchema};
//!
//! let schema = TableSchema::new(vec![
//!     Column::new("code", "Code", "code").unwrap().with_hint(DisplayHint::Monospace),
//!     Column::new("firstName", "First Name", "firstName").unwrap(),
//!     Column::new("departmentCode", "Department Code", "department.code").unwrap(),
//! ])
//! .unwrap();
//!
//! let employees = vec![
//!     Record::from_json_str(
//!         r#"{"id": 1, "code": "E001", "firstName": "Ada", "department": {"code": "RD"}}"#,
//!     )
//!     .unwrap(),
//!     Record::from_json_str(r#"{"id": 2, "code": "E002", "firstName": "Alan"}"#).unwrap(),
//! ];
//!
//! let grid = project(&schema, Some(employees.as_slice()));
//!
//! assert_eq!(grid.row_count(), 2);
//! assert_eq!(grid.column_count(), 3);
//! assert_eq!(grid.text(0, "departmentCode"), Some("RD"));
//! assert_eq!(grid.text(1, "departmentCode"), Some(""));
//! println!("{}", grid);
//! ```

pub mod column;
pub mod grid;
pub mod table_writer;

pub use column::{Column, DisplayHint, TableSchema};
pub use grid::{Cell, Grid, HeaderCell, Row, RowKey, project, project_row};
pub use table_writer::TableItemWriter;
