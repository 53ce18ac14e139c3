use std::fmt;

use serde::Serialize;

use super::column::{DisplayHint, TableSchema};
use crate::core::record::Record;

/// Identity of a rendered row, used to key list items in a UI.
///
/// It carries no meaning beyond display: the record's `id` when present,
/// otherwise its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RowKey {
    Id(String),
    Index(usize),
}

impl RowKey {
    pub fn for_record(record: &Record, index: usize) -> Self {
        record
            .get("id")
            .and_then(|id| id.display_string())
            .map_or(RowKey::Index(index), RowKey::Id)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Id(id) => write!(f, "{}", id),
            RowKey::Index(index) => write!(f, "#{}", index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<DisplayHint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub column_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<DisplayHint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub key: RowKey,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn cell(&self, column_id: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.column_id == column_id)
    }
}

/// Ordered grid of display strings, ready for any tabular renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Grid {
    headers: Vec<HeaderCell>,
    rows: Vec<Row>,
}

impl Grid {
    pub(crate) fn new(headers: Vec<HeaderCell>, rows: Vec<Row>) -> Self {
        Grid { headers, rows }
    }

    pub fn headers(&self) -> &[HeaderCell] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text of the cell at `row` in column `column_id`.
    pub fn text(&self, row: usize, column_id: &str) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.cell(column_id))
            .map(|cell| cell.text.as_str())
    }
}

impl fmt::Display for Grid {
    /// Plain-text table: header line, dashed separator, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|header| header.label.chars().count())
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| format!("{:<width$}", header.label, width = width))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(f, "{}", header.trim_end())?;

        let separator = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");
        write!(f, "{}", separator)?;

        for row in &self.rows {
            let line = row
                .cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell.text, width = width))
                .collect::<Vec<_>>()
                .join(" | ");
            write!(f, "\n{}", line.trim_end())?;
        }

        Ok(())
    }
}

pub(crate) fn header_cells(schema: &TableSchema) -> Vec<HeaderCell> {
    schema
        .columns()
        .iter()
        .map(|column| HeaderCell {
            id: column.id.clone(),
            label: column.label.clone(),
            hint: column.hint,
        })
        .collect()
}

/// Projects `record` through every column of `schema`.
///
/// `index` is the record's position in the full list and is only used as a
/// fallback row key.
pub fn project_row(schema: &TableSchema, record: &Record, index: usize) -> Row {
    let cells = schema
        .columns()
        .iter()
        .map(|column| Cell {
            column_id: column.id.clone(),
            text: column.field.resolve(Some(record)),
            hint: column.hint,
        })
        .collect();

    Row {
        key: RowKey::for_record(record, index),
        cells,
    }
}

/// Projects a record list into a grid with one row per record and one cell per
/// column, in column order.
///
/// A `None` list renders as an empty grid that still carries its headers.
///
/// # Examples
///
/// ```
/// use entity_listing::core::record::Record;
/// use entity_listing::item::table::{project, Column, TableSchema};
///
/// let schema = TableSchema::new(vec![
///     Column::new("name", "Name", "name").unwrap(),
///     Column::new("categoryCode", "Code", "customerCategory.code").unwrap(),
/// ])
/// .unwrap();
///
/// let records = vec![
///     Record::from_json_str(r#"{"id": 1, "name": "Acme", "customerCategory": {"code": "GOLD"}}"#).unwrap(),
///     Record::from_json_str(r#"{"id": 2, "name": "Globex"}"#).unwrap(),
/// ];
///
/// let grid = project(&schema, Some(records.as_slice()));
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.text(0, "categoryCode"), Some("GOLD"));
/// assert_eq!(grid.text(1, "categoryCode"), Some(""));
/// ```
pub fn project(schema: &TableSchema, records: Option<&[Record]>) -> Grid {
    let rows = records
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, record)| project_row(schema, record, index))
        .collect();

    Grid::new(header_cells(schema), rows)
}
