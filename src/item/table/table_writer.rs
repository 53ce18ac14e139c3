use std::cell::RefCell;

use log::debug;

use super::{
    column::TableSchema,
    grid::{Grid, Row, header_cells, project_row},
};
use crate::core::{
    item::{ItemWriter, ItemWriterResult},
    record::Record,
};

/// A writer that projects every written record into table rows.
///
/// Rows accumulate across chunks, positional keys continue from one chunk to
/// the next, and `open` starts a fresh grid.
///
/// # Examples
///
/// ```
/// use entity_listing::core::item::ItemWriter;
/// use entity_listing::core::record::Record;
/// use entity_listing::item::table::{Column, TableItemWriter, TableSchema};
///
/// let schema = TableSchema::new(vec![Column::new("name", "Name", "name").unwrap()]).unwrap();
/// let writer = TableItemWriter::new(schema);
///
/// writer.open().unwrap();
/// writer.write(&[Record::new().with("name", "Acme")]).unwrap();
/// writer.write(&[Record::new().with("name", "Globex")]).unwrap();
/// writer.close().unwrap();
///
/// let grid = writer.grid();
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.text(1, "name"), Some("Globex"));
/// ```
pub struct TableItemWriter {
    schema: TableSchema,
    rows: RefCell<Vec<Row>>,
}

impl TableItemWriter {
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            rows: RefCell::new(Vec::new()),
        }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Snapshot of the rows projected so far.
    pub fn grid(&self) -> Grid {
        Grid::new(header_cells(&self.schema), self.rows.borrow().clone())
    }

    pub fn into_grid(self) -> Grid {
        Grid::new(header_cells(&self.schema), self.rows.into_inner())
    }
}

impl ItemWriter<Record> for TableItemWriter {
    fn write(&self, items: &[Record]) -> ItemWriterResult {
        let mut rows = self.rows.borrow_mut();
        let offset = rows.len();
        rows.extend(
            items
                .iter()
                .enumerate()
                .map(|(index, record)| project_row(&self.schema, record, offset + index)),
        );
        debug!("Projected {} records into table rows", items.len());
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        self.rows.borrow_mut().clear();
        Ok(())
    }
}
