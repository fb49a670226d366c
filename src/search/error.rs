// Tue Feb 10 2026 - Alex

use thiserror::Error;

use crate::frontier::{Direction, FrontierError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{direction} frontier holds {count} nodes for meeting identity '{identity}'")]
    InternalConsistency {
        direction: Direction,
        identity: String,
        count: usize,
    },
    #[error("{0} frontier has no origin")]
    NotSeeded(Direction),
    #[error(transparent)]
    Frontier(#[from] FrontierError),
}
