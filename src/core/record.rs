use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::ListingError;

/// A structural value held by a [`Record`].
///
/// The variants mirror what a JSON listing endpoint can return. A key that is
/// missing from a record is not a `Value` at all: lookups return `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Value>),
    Object(Record),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the nested record when this value is object-like.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    /// String form used for table cells and XML text.
    ///
    /// `Null` has no display form. Falsy values such as `0`, `false` or `""`
    /// still produce a string.
    pub fn display_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::List(items) => Some(
                items
                    .iter()
                    .map(|item| item.display_string().unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::Object(_) => Some(serde_json::Value::from(self.clone()).to_string()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(record) => serde_json::Value::from(record),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON number form and become `Null`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One business entity as an in-memory mapping from field names to values.
///
/// Records are owned by the caller; the table projector and the XML writer
/// only ever borrow them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from any serializable entity.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Record`] when the entity does not serialize to a
    /// JSON object.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_listing::core::record::Record;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Supplier {
    ///     id: i64,
    ///     name: String,
    /// }
    ///
    /// let record = Record::from_serializable(&Supplier { id: 7, name: "Acme".to_string() }).unwrap();
    /// assert_eq!(record.get("name").and_then(|v| v.display_string()), Some("Acme".to_string()));
    /// ```
    pub fn from_serializable<T: Serialize>(entity: &T) -> Result<Self, ListingError> {
        let value = serde_json::to_value(entity)
            .map_err(|e| ListingError::Record(format!("Failed to serialize entity: {}", e)))?;
        Record::try_from(value)
    }

    /// Parses a single JSON object into a record.
    pub fn from_json_str(json: &str) -> Result<Self, ListingError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ListingError::Record(format!("Failed to parse record: {}", e)))?;
        Record::try_from(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Chained variant of [`Record::insert`], handy for fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Record(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = ListingError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::from(value) {
            Value::Object(record) => Ok(record),
            other => Err(ListingError::Record(format!(
                "Expected a JSON object, found: {}",
                serde_json::Value::from(other)
            ))),
        }
    }
}

impl From<Record> for serde_json::Value {
    fn from(record: Record) -> Self {
        serde_json::Value::Object(
            record
                .0
                .into_iter()
                .map(|(key, value)| (key, serde_json::Value::from(value)))
                .collect(),
        )
    }
}
