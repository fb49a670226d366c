// Mon Feb 9 2026 - Alex

use std::collections::VecDeque;

use indexmap::IndexSet;

use crate::canonical::canonicalize;
use crate::frontier::error::FrontierError;
use crate::frontier::node::{Direction, NodeId, PageNode};

type IdentitySet = IndexSet<String, ahash::RandomState>;

/// One directional search in progress: the discovery tree, the visited
/// identity set, and the FIFO queue of nodes awaiting expansion.
///
/// Admission appends to `discovered` and inserts into `visited` in the same
/// step, so the visited set's insertion order mirrors discovery order. The
/// intersection tie-break relies on that ordering.
pub struct Frontier {
    direction: Direction,
    origin: Option<NodeId>,
    current: Option<NodeId>,
    discovered: Vec<PageNode>,
    pending: VecDeque<NodeId>,
    visited: IdentitySet,
}

impl Frontier {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            origin: None,
            current: None,
            discovered: Vec::new(),
            pending: VecDeque::new(),
            visited: IdentitySet::default(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Admits the origin node (distance 0, no parent) and records it as
    /// current. The origin enters the pending queue, so the first
    /// `advance()` hands it back for fetching.
    pub fn seed_origin(&mut self, raw_label: &str) -> Result<NodeId, FrontierError> {
        if let Some(origin) = self.origin {
            return Err(FrontierError::DuplicateOrigin(
                self.discovered[origin.index()].raw_label().to_string(),
            ));
        }

        let identity = canonicalize(raw_label);
        let id = NodeId::new(self.discovered.len());
        self.discovered
            .push(PageNode::new(identity.clone(), raw_label.to_string(), 0, None));
        self.visited.insert(identity);
        self.pending.push_back(id);
        self.origin = Some(id);
        self.current = Some(id);
        Ok(id)
    }

    /// Admits a newly discovered link under `parent`. Returns false with no
    /// mutation when the canonical identity has been seen before; this
    /// de-duplication is what keeps the discovery tree a tree.
    pub fn try_admit(&mut self, parent: NodeId, raw_label: &str) -> bool {
        let identity = canonicalize(raw_label);
        if self.visited.contains(&identity) {
            return false;
        }

        let distance = self.discovered[parent.index()].distance() + 1;
        let id = NodeId::new(self.discovered.len());
        self.discovered.push(PageNode::new(
            identity.clone(),
            raw_label.to_string(),
            distance,
            Some(parent),
        ));
        self.visited.insert(identity);
        self.pending.push_back(id);
        true
    }

    /// Pops the next pending node into `current`. This is the only way
    /// `current` changes after seeding.
    pub fn advance(&mut self) -> Result<NodeId, FrontierError> {
        let id = self
            .pending
            .pop_front()
            .ok_or(FrontierError::QueueExhausted)?;
        self.current = Some(id);
        Ok(id)
    }

    pub fn node_count(&self) -> usize {
        self.discovered.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn node(&self, id: NodeId) -> &PageNode {
        &self.discovered[id.index()]
    }

    pub fn origin(&self) -> Option<&PageNode> {
        self.origin.map(|id| self.node(id))
    }

    pub fn current(&self) -> Option<&PageNode> {
        self.current.map(|id| self.node(id))
    }

    pub fn contains_identity(&self, identity: &str) -> bool {
        self.visited.contains(identity)
    }

    /// Handle of the admitted node with this canonical identity. Admission
    /// order is shared between `discovered` and `visited`, so the set index
    /// is the arena index.
    pub fn find_by_identity(&self, identity: &str) -> Option<NodeId> {
        self.visited.get_index_of(identity).map(NodeId::new)
    }

    /// Canonical identities in discovery order.
    pub fn visited_identities(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PageNode)> {
        self.discovered
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::mark_backward;

    fn seeded() -> Frontier {
        let mut frontier = Frontier::new(Direction::Forward);
        frontier.seed_origin("/wiki/A").unwrap();
        frontier
    }

    #[test]
    fn test_seed_origin_once() {
        let mut frontier = seeded();
        assert_eq!(frontier.node_count(), 1);
        assert_eq!(frontier.origin().unwrap().identity(), "/wiki/A");
        assert_eq!(frontier.current().unwrap().identity(), "/wiki/A");

        let err = frontier.seed_origin("/wiki/B").unwrap_err();
        assert_eq!(err, FrontierError::DuplicateOrigin("/wiki/A".to_string()));
        assert_eq!(frontier.node_count(), 1);
    }

    #[test]
    fn test_admission_idempotence() {
        let mut frontier = seeded();
        let origin = frontier.advance().unwrap();

        assert!(frontier.try_admit(origin, "/wiki/B"));
        assert_eq!(frontier.node_count(), 2);
        assert!(!frontier.try_admit(origin, "/wiki/B"));
        assert_eq!(frontier.node_count(), 2);
        assert_eq!(frontier.pending_count(), 1);
    }

    #[test]
    fn test_admission_dedupes_across_direction_tags() {
        let mut frontier = Frontier::new(Direction::Backward);
        frontier.seed_origin(&mark_backward("/wiki/A")).unwrap();
        let origin = frontier.advance().unwrap();

        assert!(frontier.try_admit(origin, &mark_backward("/wiki/B")));
        assert!(!frontier.try_admit(origin, "/wiki/B"));
        assert_eq!(frontier.node_count(), 2);
        assert_eq!(frontier.node(NodeId::new(1)).identity(), "/wiki/B");
    }

    #[test]
    fn test_tree_invariant() {
        let mut frontier = seeded();
        let mut parent = frontier.advance().unwrap();
        for label in ["/wiki/B", "/wiki/C", "/wiki/D"] {
            assert!(frontier.try_admit(parent, label));
            parent = frontier.advance().unwrap();
        }

        for (_, node) in frontier.iter() {
            let mut steps = 0u32;
            let mut cursor = node.parent();
            while let Some(id) = cursor {
                cursor = frontier.node(id).parent();
                steps += 1;
            }
            assert_eq!(steps, node.distance());
        }
    }

    #[test]
    fn test_advance_fifo_order() {
        let mut frontier = seeded();
        let origin = frontier.advance().unwrap();
        frontier.try_admit(origin, "/wiki/B");
        frontier.try_admit(origin, "/wiki/C");

        let first = frontier.advance().unwrap();
        assert_eq!(frontier.node(first).identity(), "/wiki/B");
        assert_eq!(frontier.current().unwrap().identity(), "/wiki/B");
        let second = frontier.advance().unwrap();
        assert_eq!(frontier.node(second).identity(), "/wiki/C");
    }

    #[test]
    fn test_exhaustion_is_deterministic() {
        let mut frontier = seeded();
        frontier.advance().unwrap();

        for _ in 0..3 {
            assert_eq!(frontier.advance().unwrap_err(), FrontierError::QueueExhausted);
            assert_eq!(frontier.node_count(), 1);
            assert_eq!(frontier.current().unwrap().identity(), "/wiki/A");
        }
    }

    #[test]
    fn test_find_by_identity() {
        let mut frontier = seeded();
        let origin = frontier.advance().unwrap();
        frontier.try_admit(origin, "/wiki/B");

        let id = frontier.find_by_identity("/wiki/B").unwrap();
        assert_eq!(frontier.node(id).identity(), "/wiki/B");
        assert_eq!(frontier.find_by_identity("/wiki/Z"), None);
    }
}
