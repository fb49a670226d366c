// Mon Feb 9 2026 - Alex

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two symmetric searches a frontier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// Handle into a frontier's node arena. Parent links are stored as handles
/// rather than owning pointers; the arena is the sole owner of every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One discovered graph vertex.
#[derive(Debug, Clone)]
pub struct PageNode {
    identity: String,
    raw_label: String,
    distance: u32,
    parent: Option<NodeId>,
}

impl PageNode {
    pub(crate) fn new(
        identity: String,
        raw_label: String,
        distance: u32,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            identity,
            raw_label,
            distance,
            parent,
        }
    }

    /// Canonical, direction-agnostic key.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The original label, possibly direction-tagged; used for refetch.
    pub fn raw_label(&self) -> &str {
        &self.raw_label
    }

    /// Hop count from this frontier's origin.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Handle of the node one hop closer to the origin, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_origin(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Forward.opposite(), Direction::Backward);
        assert_eq!(Direction::Backward.opposite(), Direction::Forward);
    }

    #[test]
    fn test_node_accessors() {
        let origin = PageNode::new("/wiki/A".to_string(), "/wiki/A".to_string(), 0, None);
        assert!(origin.is_origin());
        assert_eq!(origin.distance(), 0);

        let child = PageNode::new(
            "/wiki/B".to_string(),
            "/wiki/Special:WhatLinksHere/B".to_string(),
            1,
            Some(NodeId::new(0)),
        );
        assert!(!child.is_origin());
        assert_eq!(child.identity(), "/wiki/B");
        assert_eq!(child.raw_label(), "/wiki/Special:WhatLinksHere/B");
        assert_eq!(child.parent(), Some(NodeId::new(0)));
    }
}
