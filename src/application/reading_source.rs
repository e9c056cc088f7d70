// Source trait for sensor readings
use crate::domain::reading::Record;
use async_trait::async_trait;
use thiserror::Error;

/// Failure talking to the data store. Always recoverable: the cycle is
/// skipped and the scheduler keeps running.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("request to data store failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("data store responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("data store query error: {0}")]
    Query(String),
    #[error("could not decode data store response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Fetch every retained record of the known fields, in store order.
    /// An empty store yields an empty vector, not an error.
    async fn fetch(&self) -> Result<Vec<Record>, DataSourceError>;
}
