use crate::error::ListingError;

/// Result of a single read: `Ok(None)` once the source is exhausted.
pub type ItemReaderResult<R> = Result<Option<R>, ListingError>;

pub type ItemWriterResult = Result<(), ListingError>;

/// Source of items, one at a time.
///
/// Listing pages receive their records from a data-fetch collaborator; this is
/// the seam that collaborator plugs into.
pub trait ItemReader<R> {
    fn read(&self) -> ItemReaderResult<R>;
}

/// Sink for chunks of items.
///
/// `open` is called once before the first chunk and `close` once after the
/// last one. Both default to no-ops.
pub trait ItemWriter<W> {
    fn write(&self, items: &[W]) -> ItemWriterResult;

    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}

/// Reader over an in-memory snapshot, handy when the records are already
/// loaded.
pub struct SliceItemReader<'a, R> {
    items: &'a [R],
    index: std::cell::Cell<usize>,
}

impl<'a, R> SliceItemReader<'a, R> {
    pub fn new(items: &'a [R]) -> Self {
        Self {
            items,
            index: std::cell::Cell::new(0),
        }
    }
}

impl<R: Clone> ItemReader<R> for SliceItemReader<'_, R> {
    fn read(&self) -> ItemReaderResult<R> {
        let index = self.index.get();
        match self.items.get(index) {
            Some(item) => {
                self.index.set(index + 1);
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }
}
