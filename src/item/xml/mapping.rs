use serde::{Deserialize, Serialize};

use crate::{core::path::FieldPath, error::ListingError};

/// How one record field maps to XML.
///
/// A `Leaf` becomes `<xmlTag>value</xmlTag>`. A `Nested` entry points at a
/// sub-object of the record and becomes a container element holding its own
/// entries; child paths are relative to that sub-object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappingEntry {
    Nested {
        #[serde(rename = "containerTag")]
        container_tag: String,
        path: FieldPath,
        #[serde(rename = "childMappings")]
        children: Vec<MappingEntry>,
    },
    Leaf {
        #[serde(rename = "xmlTag")]
        xml_tag: String,
        path: FieldPath,
    },
}

impl MappingEntry {
    pub fn tag(&self) -> &str {
        match self {
            MappingEntry::Nested { container_tag, .. } => container_tag,
            MappingEntry::Leaf { xml_tag, .. } => xml_tag,
        }
    }

    pub fn path(&self) -> &FieldPath {
        match self {
            MappingEntry::Nested { path, .. } | MappingEntry::Leaf { path, .. } => path,
        }
    }
}

/// Returns `true` when `name` can be used as an XML element name.
///
/// Namespaces are not supported, so `:` is rejected.
pub fn is_valid_tag(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }
        _ => false,
    }
}

pub(crate) fn check_tag(name: &str) -> Result<(), ListingError> {
    if is_valid_tag(name) {
        Ok(())
    } else {
        Err(ListingError::Configuration(format!(
            "'{}' is not a valid XML tag name",
            name
        )))
    }
}

fn check_entries(entries: &[MappingEntry]) -> Result<(), ListingError> {
    for entry in entries {
        check_tag(entry.tag())?;
        if let MappingEntry::Nested { children, .. } = entry {
            check_entries(children)?;
        }
    }
    Ok(())
}

/// Ordered field-to-tag mapping for one entity type.
///
/// # Examples
///
/// ```
/// use entity_listing::item::xml::FieldMapping;
///
/// let mapping = FieldMapping::builder()
///     .leaf("id", "id")
///     .leaf("firstName", "firstName")
///     .nested("department", "department", |department| {
///         department.leaf("code", "code").leaf("description", "description")
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(mapping.entries().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MappingEntry>", into = "Vec<MappingEntry>")]
pub struct FieldMapping {
    entries: Vec<MappingEntry>,
}

impl FieldMapping {
    pub fn new(entries: Vec<MappingEntry>) -> Result<Self, ListingError> {
        check_entries(&entries)?;
        Ok(FieldMapping { entries })
    }

    pub fn builder() -> FieldMappingBuilder {
        FieldMappingBuilder::default()
    }

    /// Loads a mapping from a JSON array, for example
    /// `[{"xmlTag": "id", "path": "id"}, {"containerTag": "department", "path": "department", "childMappings": [...]}]`.
    pub fn from_json_str(json: &str) -> Result<Self, ListingError> {
        serde_json::from_str(json)
            .map_err(|e| ListingError::Configuration(format!("Invalid field mapping: {}", e)))
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }
}

impl TryFrom<Vec<MappingEntry>> for FieldMapping {
    type Error = ListingError;

    fn try_from(entries: Vec<MappingEntry>) -> Result<Self, Self::Error> {
        FieldMapping::new(entries)
    }
}

impl From<FieldMapping> for Vec<MappingEntry> {
    fn from(mapping: FieldMapping) -> Self {
        mapping.entries
    }
}

/// Builder for [`FieldMapping`]. Path and tag errors surface from `build`.
#[derive(Default)]
pub struct FieldMappingBuilder {
    entries: Vec<MappingEntry>,
    errors: Vec<String>,
}

impl FieldMappingBuilder {
    pub fn leaf(mut self, xml_tag: &str, path: &str) -> Self {
        match FieldPath::parse(path) {
            Ok(path) => self.entries.push(MappingEntry::Leaf {
                xml_tag: xml_tag.to_string(),
                path,
            }),
            Err(error) => self.errors.push(error.to_string()),
        }
        self
    }

    pub fn nested(
        mut self,
        container_tag: &str,
        path: &str,
        children: impl FnOnce(FieldMappingBuilder) -> FieldMappingBuilder,
    ) -> Self {
        let inner = children(FieldMappingBuilder::default());
        self.errors.extend(inner.errors);

        match FieldPath::parse(path) {
            Ok(path) => self.entries.push(MappingEntry::Nested {
                container_tag: container_tag.to_string(),
                path,
                children: inner.entries,
            }),
            Err(error) => self.errors.push(error.to_string()),
        }
        self
    }

    pub fn build(self) -> Result<FieldMapping, ListingError> {
        if !self.errors.is_empty() {
            return Err(ListingError::Configuration(self.errors.join("; ")));
        }
        FieldMapping::new(self.entries)
    }
}
