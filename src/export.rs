//! Turning a loaded listing into a downloadable XML file.
//!
//! [`XmlExporter`] serializes the records currently on screen and hands the
//! resulting [`Download`] to a [`FileSaver`]. The exporter is disabled while
//! the listing is empty.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};

use crate::{
    core::record::Record,
    entity::EntityKind,
    error::ListingError,
    item::xml::{FieldMapping, to_xml},
};

pub const XML_MEDIA_TYPE: &str = "application/xml";

/// A complete file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub media_type: String,
    pub body: Vec<u8>,
}

impl Download {
    pub fn xml(file_name: &str, document: String) -> Self {
        Self {
            file_name: file_name.to_string(),
            media_type: XML_MEDIA_TYPE.to_string(),
            body: document.into_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Capability to persist a [`Download`] somewhere the user can reach it.
pub trait FileSaver {
    /// Saves the download and returns where it ended up.
    fn save(&self, download: &Download) -> Result<PathBuf, ListingError>;
}

/// Saves downloads as files inside a directory, creating it when needed.
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn check_file_name(file_name: &str) -> Result<(), ListingError> {
    if file_name.is_empty()
        || file_name == "."
        || file_name.contains("..")
        || file_name.contains(['/', '\\'])
    {
        return Err(ListingError::Export(format!(
            "Invalid file name: {:?}",
            file_name
        )));
    }
    Ok(())
}

impl FileSaver for DirectorySaver {
    fn save(&self, download: &Download) -> Result<PathBuf, ListingError> {
        check_file_name(&download.file_name)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| ListingError::Export(format!("Failed to create directory: {}", e)))?;

        let path = self.dir.join(&download.file_name);
        fs::write(&path, &download.body)
            .map_err(|e| ListingError::Export(format!("Failed to write file: {}", e)))?;

        info!("Saved {} ({} bytes)", path.display(), download.len());
        Ok(path)
    }
}

/// Export action for one listing.
///
/// # Examples
///
/// ```
/// use entity_listing::core::record::Record;
/// use entity_listing::entity::EntityKind;
/// use entity_listing::export::XmlExporter;
///
/// let exporter = XmlExporter::for_kind(EntityKind::Supplier).unwrap();
/// assert_eq!(exporter.file_name(), "suppliers.xml");
/// assert_eq!(exporter.label(), "Export XML");
/// assert!(!exporter.is_enabled(&[]));
///
/// let suppliers = vec![Record::new().with("id", 1).with("name", "Initech")];
/// assert!(exporter.is_enabled(&suppliers));
///
/// let download = exporter.download(&suppliers).unwrap();
/// assert_eq!(download.media_type, "application/xml");
/// ```
pub struct XmlExporter {
    entity_tag: String,
    mapping: FieldMapping,
    file_name: String,
    label: String,
    disabled: bool,
}

impl XmlExporter {
    pub fn new(entity_tag: &str, mapping: FieldMapping, file_name: &str) -> Self {
        Self {
            entity_tag: entity_tag.to_string(),
            mapping,
            file_name: file_name.to_string(),
            label: "Export XML".to_string(),
            disabled: false,
        }
    }

    pub fn for_kind(kind: EntityKind) -> Result<Self, ListingError> {
        Ok(Self::new(
            kind.tag(),
            kind.field_mapping()?,
            &kind.export_file_name(),
        ))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The export is offered only when not disabled and there is something to export.
    pub fn is_enabled(&self, records: &[Record]) -> bool {
        !self.disabled && !records.is_empty()
    }

    /// Serializes `records` without checking whether the export is enabled.
    pub fn download(&self, records: &[Record]) -> Result<Download, ListingError> {
        let document = to_xml(Some(records), &self.entity_tag, &self.mapping)?;
        Ok(Download::xml(&self.file_name, document))
    }

    pub fn export(&self, records: &[Record], saver: &dyn FileSaver) -> Result<PathBuf, ListingError> {
        if !self.is_enabled(records) {
            warn!("Export of {} is disabled", self.file_name);
            return Err(ListingError::Export(format!(
                "Export of {} is disabled",
                self.file_name
            )));
        }

        let download = self.download(records)?;
        info!("Exporting {} records to {}", records.len(), self.file_name);
        saver.save(&download)
    }
}
