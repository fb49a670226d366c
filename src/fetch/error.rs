// Wed Feb 11 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("page not present in graph: {0}")]
    PageMissing(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}
