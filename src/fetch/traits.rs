// Wed Feb 11 2026 - Alex

use crate::fetch::error::FetchError;
use crate::frontier::Direction;

/// The fetch/parse collaborator. Given one raw label, produces the raw
/// outbound labels of that page: real anchors for the forward direction,
/// direction-tagged inbound links for the backward direction.
///
/// Implementations own all transport concerns (domains, retries, pacing);
/// the search core never blocks on them directly.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, direction: Direction, raw_label: &str) -> Result<Vec<String>, FetchError>;
}
