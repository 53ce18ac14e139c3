use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::record::{Record, Value};
use crate::error::ListingError;

/// A parsed dot-delimited path into a [`Record`], such as `customerCategory.code`.
///
/// Parsing rejects empty paths and empty segments, so a `FieldPath` always has
/// at least one non-empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a dotted path.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_listing::core::path::FieldPath;
    ///
    /// let path = FieldPath::parse("department.code").unwrap();
    /// assert_eq!(path.segments(), ["department", "code"]);
    /// assert!(FieldPath::parse("department..code").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self, ListingError> {
        if path.is_empty() {
            return Err(ListingError::Configuration(
                "Field path must not be empty".to_string(),
            ));
        }

        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ListingError::Configuration(format!(
                "Field path '{}' contains an empty segment",
                path
            )));
        }

        Ok(FieldPath { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments; `1` for a top-level field.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Walks the path through `record`.
    ///
    /// Returns `None` as soon as a segment is missing or the current value is
    /// not an object. A `Null` terminal value is returned as-is.
    pub fn lookup<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        lookup_segments(record, self.segments.iter().map(String::as_str))
    }

    /// Display string of the value at this path, or `""` when the value is
    /// absent or null.
    pub fn resolve(&self, record: Option<&Record>) -> String {
        record
            .and_then(|r| self.lookup(r))
            .and_then(Value::display_string)
            .unwrap_or_default()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl std::str::FromStr for FieldPath {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        FieldPath::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn lookup_segments<'r, 's>(
    record: &'r Record,
    mut segments: impl Iterator<Item = &'s str>,
) -> Option<&'r Value> {
    let mut current = record.get(segments.next()?)?;
    for segment in segments {
        current = current.as_record()?.get(segment)?;
    }
    Some(current)
}

/// Typed accessor behind [`resolve`].
///
/// An empty path or a path with an empty segment never matches.
pub fn resolve_value<'r>(record: Option<&'r Record>, path: &str) -> Option<&'r Value> {
    let record = record?;
    if path.split('.').any(str::is_empty) {
        return None;
    }
    lookup_segments(record, path.split('.'))
}

/// Resolves a dotted `path` against `record` and returns its display string.
///
/// Never fails: a missing record, a missing segment, a non-object
/// intermediate value or a `null` terminal value all give `""`.
///
/// # Examples
///
/// ```
/// use entity_listing::core::path::resolve;
/// use entity_listing::core::record::Record;
///
/// let record = Record::from_json_str(r#"{"a": {"b": 5}, "z": 0}"#).unwrap();
///
/// assert_eq!(resolve(Some(&record), "a.b"), "5");
/// assert_eq!(resolve(Some(&record), "a.c"), "");
/// assert_eq!(resolve(Some(&record), "z"), "0");
/// assert_eq!(resolve(None, "a"), "");
/// ```
pub fn resolve(record: Option<&Record>, path: &str) -> String {
    resolve_value(record, path)
        .and_then(Value::display_string)
        .unwrap_or_default()
}
