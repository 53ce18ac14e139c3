use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use log::{debug, error, info};

use crate::error::ListingError;

use super::item::{ItemReader, ItemWriter};

#[derive(Debug, PartialEq)]
enum ChunkStatus {
    Error,
    Finished,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Error,
    Success,
    Started,
}

#[derive(Debug)]
pub struct StepResult {
    pub start: Instant,
    pub end: Instant,
    pub duration: Duration,
    pub status: StepStatus,
    pub read_count: usize,
    pub write_count: usize,
    pub read_error_count: usize,
    pub write_error_count: usize,
}

/// Drives records from a reader to a writer, one chunk at a time.
///
/// Read and write errors are logged and counted. Once their sum exceeds the
/// skip limit the step stops with [`StepStatus::Error`].
pub struct Step<'a, T> {
    reader: &'a dyn ItemReader<T>,
    writer: &'a dyn ItemWriter<T>,
    chunk_size: usize,
    skip_limit: usize,
    status: Cell<StepStatus>,
    read_count: Cell<usize>,
    write_count: Cell<usize>,
    read_error_count: Cell<usize>,
    write_error_count: Cell<usize>,
}

impl<T> Step<'_, T> {
    pub fn execute(&self) -> StepResult {
        let start = Instant::now();

        debug!("Start of step");
        self.status.set(StepStatus::Started);

        let mut step_status = if self.manage_error("open", self.writer.open()) {
            self.run_chunks()
        } else {
            StepStatus::Error
        };

        if !self.manage_error("close", self.writer.close()) {
            step_status = StepStatus::Error;
        }

        self.status.set(step_status);
        info!(
            "End of step: status={:?}, read={}, written={}, read_errors={}, write_errors={}",
            step_status,
            self.read_count.get(),
            self.write_count.get(),
            self.read_error_count.get(),
            self.write_error_count.get()
        );

        StepResult {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            status: step_status,
            read_count: self.read_count.get(),
            write_count: self.write_count.get(),
            read_error_count: self.read_error_count.get(),
            write_error_count: self.write_error_count.get(),
        }
    }

    pub fn get_status(&self) -> StepStatus {
        self.status.get()
    }

    pub fn get_read_count(&self) -> usize {
        self.read_count.get()
    }

    pub fn get_write_count(&self) -> usize {
        self.write_count.get()
    }

    pub fn get_read_error_count(&self) -> usize {
        self.read_error_count.get()
    }

    pub fn get_write_error_count(&self) -> usize {
        self.write_error_count.get()
    }

    fn run_chunks(&self) -> StepStatus {
        let mut read_items: Vec<T> = Vec::with_capacity(self.chunk_size);

        loop {
            let read_chunk_status = self.read_chunk(&mut read_items);

            if read_chunk_status == ChunkStatus::Error {
                return StepStatus::Error;
            }

            if !read_items.is_empty() && self.write_chunk(&read_items) == ChunkStatus::Error {
                return StepStatus::Error;
            }

            if read_chunk_status == ChunkStatus::Finished {
                return StepStatus::Success;
            }
        }
    }

    fn is_skip_limit_reached(&self) -> bool {
        self.read_error_count.get() + self.write_error_count.get() > self.skip_limit
    }

    fn read_chunk(&self, read_items: &mut Vec<T>) -> ChunkStatus {
        debug!("Start reading chunk");
        read_items.clear();

        loop {
            match self.reader.read() {
                Ok(Some(item)) => {
                    read_items.push(item);
                    self.read_count.set(self.read_count.get() + 1);
                }
                Ok(None) => {
                    debug!("End reading chunk: FINISHED");
                    return ChunkStatus::Finished;
                }
                Err(err) => {
                    self.read_error_count.set(self.read_error_count.get() + 1);
                    error!("Error occurred during read item: {}", err);

                    if self.is_skip_limit_reached() {
                        return ChunkStatus::Error;
                    }
                }
            }

            if read_items.len() == self.chunk_size {
                debug!("End reading chunk: FULL");
                return ChunkStatus::Full;
            }
        }
    }

    fn write_chunk(&self, items: &[T]) -> ChunkStatus {
        debug!("Start writing chunk of {} items", items.len());

        let result = self.writer.write(items).and_then(|()| self.writer.flush());
        match result {
            Ok(()) => {
                self.write_count.set(self.write_count.get() + items.len());
                debug!("End writing chunk");
                ChunkStatus::Full
            }
            Err(err) => {
                self.write_error_count
                    .set(self.write_error_count.get() + items.len());
                error!("ItemWriter error: {}", err);
                if self.is_skip_limit_reached() {
                    ChunkStatus::Error
                } else {
                    ChunkStatus::Full
                }
            }
        }
    }

    fn manage_error(&self, phase: &str, result: Result<(), ListingError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                error!("ItemWriter {} error: {}", phase, err);
                false
            }
        }
    }
}

pub struct StepBuilder<'a, T> {
    reader: Option<&'a dyn ItemReader<T>>,
    writer: Option<&'a dyn ItemWriter<T>>,
    chunk_size: usize,
    skip_limit: usize,
}

impl<T> Default for StepBuilder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> StepBuilder<'a, T> {
    pub fn new() -> Self {
        Self {
            reader: None,
            writer: None,
            chunk_size: 1,
            skip_limit: 0,
        }
    }

    pub fn reader(mut self, reader: &'a impl ItemReader<T>) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn writer(mut self, writer: &'a impl ItemWriter<T>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Number of items per chunk; `0` is treated as `1`.
    pub fn chunk(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn skip_limit(mut self, skip_limit: usize) -> Self {
        self.skip_limit = skip_limit;
        self
    }

    pub fn build(self) -> Result<Step<'a, T>, ListingError> {
        let reader = self
            .reader
            .ok_or_else(|| ListingError::Configuration("Step requires a reader".to_string()))?;
        let writer = self
            .writer
            .ok_or_else(|| ListingError::Configuration("Step requires a writer".to_string()))?;

        Ok(Step {
            reader,
            writer,
            chunk_size: self.chunk_size,
            skip_limit: self.skip_limit,
            status: Cell::new(StepStatus::Started),
            read_count: Cell::new(0),
            write_count: Cell::new(0),
            read_error_count: Cell::new(0),
            write_error_count: Cell::new(0),
        })
    }
}
