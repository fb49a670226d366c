// Wed Feb 11 2026 - Alex

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canonical::{canonicalize, mark_backward};
use crate::fetch::error::FetchError;
use crate::fetch::traits::PageFetcher;
use crate::frontier::Direction;

/// A crawled link graph: article path -> outbound article paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub pages: HashMap<String, Vec<String>>,
}

impl GraphSnapshot {
    pub fn load(path: &Path) -> Result<Self, FetchError> {
        let file = File::open(path)?;
        let snapshot = serde_json::from_reader(BufReader::new(file))?;
        Ok(snapshot)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Deterministic collaborator serving both directions from one snapshot:
/// forward from the adjacency list, backward from its inversion with the
/// direction marker applied to every returned label.
pub struct SnapshotFetcher {
    snapshot: GraphSnapshot,
    inbound: HashMap<String, Vec<String>>,
}

impl SnapshotFetcher {
    pub fn new(snapshot: GraphSnapshot) -> Self {
        let mut inbound: HashMap<String, Vec<String>> = HashMap::new();
        for (page, links) in &snapshot.pages {
            for link in links {
                inbound
                    .entry(canonicalize(link))
                    .or_default()
                    .push(page.clone());
            }
        }
        Self { snapshot, inbound }
    }

    fn knows(&self, identity: &str) -> bool {
        self.snapshot.pages.contains_key(identity) || self.inbound.contains_key(identity)
    }
}

impl PageFetcher for SnapshotFetcher {
    fn fetch(&self, direction: Direction, raw_label: &str) -> Result<Vec<String>, FetchError> {
        let identity = canonicalize(raw_label);
        match direction {
            Direction::Forward => self
                .snapshot
                .pages
                .get(&identity)
                .cloned()
                .ok_or(FetchError::PageMissing(identity)),
            Direction::Backward => {
                if !self.knows(&identity) {
                    return Err(FetchError::PageMissing(identity));
                }
                let links = self
                    .inbound
                    .get(&identity)
                    .map(|sources| sources.iter().map(|s| mark_backward(s)).collect())
                    .unwrap_or_default();
                Ok(links)
            }
        }
    }
}
