// Tue Feb 10 2026 - Alex

pub mod intersect;
pub mod path;
pub mod session;
pub mod error;

pub use intersect::{intersect, Meeting};
pub use path::reconstruct_path;
pub use session::{FetchDirective, FetchFailure, PageEvent, SearchSession, SessionState};
pub use error::SearchError;
