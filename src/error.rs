use thiserror::Error;

#[derive(Error, Debug)]
/// Listing error
pub enum ListingError {
    #[error("ItemWriter from: {0}")]
    ItemWriter(String),

    #[error("ItemReader from: {0}")]
    ItemReader(String),

    #[error("Record from: {0}")]
    Record(String),

    #[error("Configuration from: {0}")]
    Configuration(String),

    #[error("Export from: {0}")]
    Export(String),
}
