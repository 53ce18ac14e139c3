use std::{cell::Cell, fmt::Debug};

use log::info;

use crate::core::item::{ItemWriter, ItemWriterResult};

/// Writes every item to the log at `info` level, prefixed with a label and
/// its position in the listing.
#[derive(Default)]
pub struct LoggerWriter {
    label: String,
    written: Cell<usize>,
}

impl LoggerWriter {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            written: Cell::new(0),
        }
    }

    pub fn written(&self) -> usize {
        self.written.get()
    }
}

impl<T> ItemWriter<T> for LoggerWriter
where
    T: Debug,
{
    fn write(&self, items: &[T]) -> ItemWriterResult {
        let offset = self.written.get();
        items
            .iter()
            .enumerate()
            .for_each(|(index, item)| info!("{}[{}]: {:?}", self.label, offset + index, item));
        self.written.set(offset + items.len());
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        self.written.set(0);
        Ok(())
    }
}
