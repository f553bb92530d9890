mod client;
mod records;
mod usage;

use thiserror::Error;

pub use client::get_http_client;
pub use records::{RecordUpdate, RemoteHistory, UtmRecord};
pub use usage::UsageRecord;

/// Failure modes of the remote persistence collaborator. Surfaced to the
/// user as a message; never retried automatically.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("storage request failed: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        RemoteError::Storage(e.to_string())
    }
}
