use std::cell::RefCell;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use super::escape::escape;
use super::mapping::{FieldMapping, MappingEntry, check_tag};
use crate::core::item::{ItemWriter, ItemWriterResult};
use crate::core::record::{Record, Value};
use crate::error::ListingError;

const INDENT_SIZE: usize = 2;

/// Plural form used for the root element: `customer` becomes `customers`.
pub fn plural(tag: &str) -> String {
    format!("{}s", tag)
}

/// A writer that serializes records to an XML document.
///
/// `open` writes the XML declaration and the root start tag, `write` writes one
/// item element per record, and `close` writes the root end tag and flushes.
/// Every text value goes through [`escape`](super::escape::escape).
///
/// # Examples
///
/// ```
/// use entity_listing::core::item::ItemWriter;
/// use entity_listing::core::record::Record;
/// use entity_listing::item::xml::{FieldMapping, XmlItemWriterBuilder};
///
/// let mapping = FieldMapping::builder()
///     .leaf("id", "id")
///     .leaf("name", "name")
///     .build()
///     .unwrap();
///
/// let writer = XmlItemWriterBuilder::new()
///     .item_tag("supplier")
///     .mapping(mapping)
///     .from_writer(Vec::new())
///     .unwrap();
///
/// writer.open().unwrap();
/// writer.write(&[Record::new().with("id", 1).with("name", "Smith & Sons")]).unwrap();
/// writer.close().unwrap();
///
/// let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
/// assert_eq!(
///     xml,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<suppliers>\n  <supplier>\n    <id>1</id>\n    <name>Smith &amp; Sons</name>\n  </supplier>\n</suppliers>"
/// );
/// ```
pub struct XmlItemWriter<W: Write = File> {
    writer: RefCell<Writer<BufWriter<W>>>,
    root_tag: String,
    item_tag: String,
    mapping: FieldMapping,
}

impl<W: Write> XmlItemWriter<W> {
    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    pub fn item_tag(&self) -> &str {
        &self.item_tag
    }

    /// Flushes buffered output and returns the underlying sink.
    pub fn into_inner(self) -> Result<W, ListingError> {
        self.writer
            .into_inner()
            .into_inner()
            .into_inner()
            .map_err(|e| ListingError::ItemWriter(format!("Failed to flush XML output: {}", e)))
    }

    fn write_event<'a>(&self, event: impl Into<Event<'a>>) -> ItemWriterResult {
        self.writer
            .borrow_mut()
            .write_event(event)
            .map_err(|e| ListingError::ItemWriter(format!("Failed to write XML event: {}", e)))
    }

    fn write_leaf(&self, tag: &str, text: &str) -> ItemWriterResult {
        self.write_event(Event::Start(BytesStart::new(tag)))?;
        self.write_event(Event::Text(BytesText::from_escaped(escape(text))))?;
        self.write_event(Event::End(BytesEnd::new(tag)))
    }

    fn write_entries(&self, record: &Record, entries: &[MappingEntry]) -> ItemWriterResult {
        for entry in entries {
            match entry {
                MappingEntry::Leaf { xml_tag, path } => {
                    self.write_leaf(xml_tag, &path.resolve(Some(record)))?;
                }
                MappingEntry::Nested {
                    container_tag,
                    path,
                    children,
                } => {
                    // Absent, null or non-object: the container is left out.
                    if let Some(nested) = path.lookup(record).and_then(Value::as_record) {
                        self.write_event(Event::Start(BytesStart::new(container_tag.as_str())))?;
                        self.write_entries(nested, children)?;
                        self.write_event(Event::End(BytesEnd::new(container_tag.as_str())))?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> ItemWriter<Record> for XmlItemWriter<W> {
    fn write(&self, items: &[Record]) -> ItemWriterResult {
        for item in items {
            self.write_event(Event::Start(BytesStart::new(self.item_tag.as_str())))?;
            self.write_entries(item, self.mapping.entries())?;
            self.write_event(Event::End(BytesEnd::new(self.item_tag.as_str())))?;
        }
        debug!("Wrote {} <{}> elements", items.len(), self.item_tag);
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.writer
            .borrow_mut()
            .get_mut()
            .flush()
            .map_err(|e| ListingError::ItemWriter(format!("Failed to flush XML file: {}", e)))
    }

    fn open(&self) -> ItemWriterResult {
        self.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.write_event(Event::Start(BytesStart::new(self.root_tag.as_str())))
    }

    fn close(&self) -> ItemWriterResult {
        self.write_event(Event::End(BytesEnd::new(self.root_tag.as_str())))?;
        self.flush()
    }
}

/// Builder for creating XML item writers.
///
/// The item tag defaults to `item`, the root tag to the plural of the item tag
/// and the mapping to an empty one.
#[derive(Default)]
pub struct XmlItemWriterBuilder {
    root_tag: Option<String>,
    item_tag: Option<String>,
    mapping: Option<FieldMapping>,
}

impl XmlItemWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_tag(mut self, root_tag: &str) -> Self {
        self.root_tag = Some(root_tag.to_string());
        self
    }

    pub fn item_tag(mut self, item_tag: &str) -> Self {
        self.item_tag = Some(item_tag.to_string());
        self
    }

    pub fn mapping(mut self, mapping: FieldMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Creates an `XmlItemWriter` writing to a new file at `path`.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<XmlItemWriter<File>, ListingError> {
        let file = File::create(path)
            .map_err(|e| ListingError::ItemWriter(format!("Failed to create XML file: {}", e)))?;
        self.from_writer(file)
    }

    /// Creates an `XmlItemWriter` over any sink, such as an in-memory buffer.
    pub fn from_writer<W: Write>(self, wtr: W) -> Result<XmlItemWriter<W>, ListingError> {
        let item_tag = self.item_tag.unwrap_or_else(|| "item".to_string());
        let root_tag = self.root_tag.unwrap_or_else(|| plural(&item_tag));
        check_tag(&item_tag)?;
        check_tag(&root_tag)?;

        let mapping = match self.mapping {
            Some(mapping) => mapping,
            None => FieldMapping::new(Vec::new())?,
        };

        Ok(XmlItemWriter {
            writer: RefCell::new(Writer::new_with_indent(
                BufWriter::new(wtr),
                b' ',
                INDENT_SIZE,
            )),
            root_tag,
            item_tag,
            mapping,
        })
    }
}

/// Serializes `records` into a complete XML document.
///
/// The root element is the plural of `entity_tag` and each record becomes an
/// `entity_tag` element laid out by `mapping`. A `None` list is treated as
/// empty. Output is deterministic: the same input always yields the same
/// bytes.
///
/// # Errors
///
/// Only an invalid `entity_tag` makes this fail; record contents never do.
///
/// # Examples
///
/// ```
/// use entity_listing::item::xml::{to_xml, FieldMapping};
///
/// let mapping = FieldMapping::builder().leaf("id", "id").build().unwrap();
/// let xml = to_xml(None, "customer", &mapping).unwrap();
///
/// assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<customers>\n</customers>");
/// ```
pub fn to_xml(
    records: Option<&[Record]>,
    entity_tag: &str,
    mapping: &FieldMapping,
) -> Result<String, ListingError> {
    let writer = XmlItemWriterBuilder::new()
        .item_tag(entity_tag)
        .mapping(mapping.clone())
        .from_writer(Vec::new())?;

    writer.open()?;
    writer.write(records.unwrap_or_default())?;
    writer.close()?;

    let bytes = writer.into_inner()?;
    String::from_utf8(bytes)
        .map_err(|e| ListingError::ItemWriter(format!("XML output is not UTF-8: {}", e)))
}
