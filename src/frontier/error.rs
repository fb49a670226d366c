// Mon Feb 9 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontierError {
    #[error("origin already seeded as '{0}'")]
    DuplicateOrigin(String),
    #[error("pending queue is empty")]
    QueueExhausted,
}
