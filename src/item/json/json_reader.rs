use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fs::File,
    io::{BufReader, Read},
    mem,
    path::Path,
};

use log::{debug, warn};

use crate::{
    core::{
        item::{ItemReader, ItemReaderResult},
        record::Record,
    },
    error::ListingError,
};

enum ReaderState<R> {
    Unread(BufReader<R>),
    Buffered(VecDeque<serde_json::Value>),
    Done,
}

/// Reads records from a JSON listing body.
///
/// The body is parsed on the first call to `read`. A JSON array yields one
/// record per element and `null` yields no records at all. An element that is
/// not an object is reported as an error for that element only; a body that is
/// not valid JSON is reported once, then the reader is exhausted.
pub struct JsonRecordReader<R> {
    state: RefCell<ReaderState<R>>,
    index: Cell<usize>,
}

impl<R: Read> JsonRecordReader<R> {
    fn new(rdr: R, capacity: usize) -> Self {
        Self {
            state: RefCell::new(ReaderState::Unread(BufReader::with_capacity(capacity, rdr))),
            index: Cell::new(0),
        }
    }

    fn load(rdr: BufReader<R>) -> Result<VecDeque<serde_json::Value>, ListingError> {
        let body: Option<Vec<serde_json::Value>> = serde_json::from_reader(rdr)
            .map_err(|e| ListingError::ItemReader(format!("Failed to parse JSON listing: {}", e)))?;

        match body {
            Some(items) => {
                debug!("Loaded {} JSON items", items.len());
                Ok(items.into())
            }
            None => {
                debug!("JSON listing is null, treating it as empty");
                Ok(VecDeque::new())
            }
        }
    }
}

impl<R: Read> ItemReader<Record> for JsonRecordReader<R> {
    fn read(&self) -> ItemReaderResult<Record> {
        let mut state = self.state.borrow_mut();

        if let ReaderState::Unread(_) = &*state {
            if let ReaderState::Unread(rdr) = mem::replace(&mut *state, ReaderState::Done) {
                *state = ReaderState::Buffered(Self::load(rdr)?);
            }
        }

        let ReaderState::Buffered(items) = &mut *state else {
            return Ok(None);
        };

        match items.pop_front() {
            Some(item) => {
                let index = self.index.get();
                self.index.set(index + 1);
                Record::try_from(item).map(Some).map_err(|e| {
                    warn!("JSON item {} is not a record", index);
                    ListingError::ItemReader(format!("Item {}: {}", index, e))
                })
            }
            None => {
                *state = ReaderState::Done;
                Ok(None)
            }
        }
    }
}

pub struct JsonRecordReaderBuilder {
    capacity: usize,
}

impl Default for JsonRecordReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonRecordReaderBuilder {
    pub fn new() -> Self {
        Self { capacity: 8 * 1024 }
    }

    /// Capacity of the read buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn from_reader<R: Read>(self, rdr: R) -> JsonRecordReader<R> {
        JsonRecordReader::new(rdr, self.capacity)
    }

    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<JsonRecordReader<File>, ListingError> {
        let file = File::open(path)
            .map_err(|e| ListingError::ItemReader(format!("Failed to open JSON file: {}", e)))?;
        Ok(self.from_reader(file))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::JsonRecordReaderBuilder;
    use crate::{
        core::{item::ItemReader, path::resolve},
        error::ListingError,
    };

    #[test]
    fn array_elements_are_read_in_order() {
        let body = r#"[
            {"id": 1, "name": "Acme", "customerCategory": {"code": "GOLD"}},
            {"id": 2, "name": "Globex"}
        ]"#;
        let reader = JsonRecordReaderBuilder::new().from_reader(Cursor::new(body));

        let first = reader.read().unwrap().unwrap();
        assert_eq!(resolve(Some(&first), "customerCategory.code"), "GOLD");

        let second = reader.read().unwrap().unwrap();
        assert_eq!(resolve(Some(&second), "name"), "Globex");

        assert!(reader.read().unwrap().is_none());
        assert!(reader.read().unwrap().is_none());
    }

    #[test]
    fn null_body_is_an_empty_listing() {
        let reader = JsonRecordReaderBuilder::new().from_reader(Cursor::new("null"));
        assert!(reader.read().unwrap().is_none());
    }

    #[test]
    fn empty_array_is_an_empty_listing() {
        let reader = JsonRecordReaderBuilder::new()
            .capacity(16)
            .from_reader(Cursor::new("  [ ]  "));
        assert!(reader.read().unwrap().is_none());
    }

    #[test]
    fn non_object_element_fails_alone() {
        let body = r#"[{"id": 1}, 42, {"id": 3}]"#;
        let reader = JsonRecordReaderBuilder::new().from_reader(Cursor::new(body));

        assert!(reader.read().unwrap().is_some());
        match reader.read() {
            Err(ListingError::ItemReader(message)) => assert!(message.starts_with("Item 1:")),
            other => panic!("Expected ItemReader error, got {:?}", other),
        }
        let third = reader.read().unwrap().unwrap();
        assert_eq!(resolve(Some(&third), "id"), "3");
        assert!(reader.read().unwrap().is_none());
    }

    #[test]
    fn malformed_body_fails_once() {
        let reader = JsonRecordReaderBuilder::new().from_reader(Cursor::new("[{\"id\": 1,"));

        match reader.read() {
            Err(ListingError::ItemReader(message)) => {
                assert!(message.contains("Failed to parse JSON listing"))
            }
            other => panic!("Expected ItemReader error, got {:?}", other),
        }
        assert!(reader.read().unwrap().is_none());
    }

    #[test]
    fn object_body_is_rejected() {
        let reader = JsonRecordReaderBuilder::new().from_reader(Cursor::new(r#"{"id": 1}"#));
        assert!(reader.read().is_err());
    }

    #[test]
    fn records_are_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 9, "firstName": "Grace"}}]"#).unwrap();

        let reader = JsonRecordReaderBuilder::new().from_path(file.path()).unwrap();
        let record = reader.read().unwrap().unwrap();

        assert_eq!(resolve(Some(&record), "firstName"), "Grace");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = JsonRecordReaderBuilder::new().from_path("/nonexistent/listing.json");
        assert!(matches!(result, Err(ListingError::ItemReader(_))));
    }
}
