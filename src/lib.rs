// Mon Feb 9 2026 - Alex

#![allow(dead_code)]

pub mod config;
pub mod canonical;
pub mod frontier;
pub mod search;
pub mod fetch;
pub mod ui;

pub use config::SearchConfig;
pub use frontier::{Direction, Frontier, FrontierError, NodeId, PageNode};
pub use search::{
    intersect, reconstruct_path, FetchDirective, FetchFailure, Meeting, PageEvent, SearchError,
    SearchSession, SessionState,
};
pub use fetch::{FetchError, GraphSnapshot, PageFetcher, SnapshotFetcher};
pub use ui::{Banner, RaceDisplay};
