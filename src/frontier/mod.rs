// Mon Feb 9 2026 - Alex

pub mod node;
pub mod frontier;
pub mod error;

pub use node::{Direction, NodeId, PageNode};
pub use frontier::Frontier;
pub use error::FrontierError;
