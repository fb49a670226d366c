// Wed Feb 11 2026 - Alex

pub mod traits;
pub mod snapshot;
pub mod error;

pub use traits::PageFetcher;
pub use snapshot::{GraphSnapshot, SnapshotFetcher};
pub use error::FetchError;
