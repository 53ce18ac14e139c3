use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{core::path::FieldPath, error::ListingError};

/// Presentation hint forwarded untouched to the renderer.
///
/// Hints never change the text of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayHint {
    Emphasis,
    Monospace,
}

/// A table column: identity, header label and the path of the displayed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub field: FieldPath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<DisplayHint>,
}

impl Column {
    /// Creates a column, parsing `field` as a dotted path.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_listing::item::table::{Column, DisplayHint};
    ///
    /// let column = Column::new("departmentCode", "Department Code", "department.code")
    ///     .unwrap()
    ///     .with_hint(DisplayHint::Emphasis);
    /// assert_eq!(column.field.depth(), 2);
    /// ```
    pub fn new(id: &str, label: &str, field: &str) -> Result<Self, ListingError> {
        Ok(Column {
            id: id.to_string(),
            label: label.to_string(),
            field: FieldPath::parse(field)?,
            hint: None,
        })
    }

    pub fn with_hint(mut self, hint: DisplayHint) -> Self {
        self.hint = Some(hint);
        self
    }
}

#[derive(Deserialize)]
struct RawTableSchema {
    columns: Vec<Column>,
}

impl TryFrom<RawTableSchema> for TableSchema {
    type Error = ListingError;

    fn try_from(raw: RawTableSchema) -> Result<Self, Self::Error> {
        TableSchema::new(raw.columns)
    }
}

/// Ordered, validated set of columns for one table.
///
/// Column ids are non-empty and unique within the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTableSchema")]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(columns: Vec<Column>) -> Result<Self, ListingError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.id.is_empty() {
                return Err(ListingError::Configuration(
                    "Column id must not be empty".to_string(),
                ));
            }
            if !seen.insert(column.id.as_str()) {
                return Err(ListingError::Configuration(format!(
                    "Duplicate column id '{}'",
                    column.id
                )));
            }
        }

        Ok(TableSchema { columns })
    }

    /// Loads a schema from a JSON layout such as
    /// `{"columns": [{"id": "name", "label": "Name", "field": "name"}]}`.
    pub fn from_json_str(json: &str) -> Result<Self, ListingError> {
        serde_json::from_str(json)
            .map_err(|e| ListingError::Configuration(format!("Invalid table layout: {}", e)))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
