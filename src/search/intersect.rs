// Tue Feb 10 2026 - Alex

use crate::frontier::Frontier;

/// Where the two frontiers meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Meeting {
    /// The two origins see each other directly; the route is the 2-node
    /// trivial path, regardless of any other shared identity.
    Adjacent,
    /// A single shared identity chosen as the path pivot.
    At(String),
}

/// Tests whether the two visited sets intersect.
///
/// Tie-break when several identities are shared: the one the forward
/// frontier discovered first wins (its visited set is iterated in insertion
/// order). Deterministic for a given input graph; the resulting route is a
/// route, not necessarily the shortest one.
pub fn intersect(forward: &Frontier, backward: &Frontier) -> Option<Meeting> {
    let forward_origin = forward.origin()?;
    let backward_origin = backward.origin()?;

    if forward.contains_identity(backward_origin.identity())
        && backward.contains_identity(forward_origin.identity())
    {
        return Some(Meeting::Adjacent);
    }

    forward
        .visited_identities()
        .find(|&identity| backward.contains_identity(identity))
        .map(|identity| Meeting::At(identity.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::mark_backward;
    use crate::frontier::Direction;

    fn forward_chain(labels: &[&str]) -> Frontier {
        let mut frontier = Frontier::new(Direction::Forward);
        frontier.seed_origin(labels[0]).unwrap();
        let mut parent = frontier.advance().unwrap();
        for label in &labels[1..] {
            assert!(frontier.try_admit(parent, label));
            parent = frontier.advance().unwrap();
        }
        frontier
    }

    fn backward_chain(labels: &[&str]) -> Frontier {
        let mut frontier = Frontier::new(Direction::Backward);
        frontier.seed_origin(&mark_backward(labels[0])).unwrap();
        let mut parent = frontier.advance().unwrap();
        for label in &labels[1..] {
            assert!(frontier.try_admit(parent, &mark_backward(label)));
            parent = frontier.advance().unwrap();
        }
        frontier
    }

    #[test]
    fn test_no_false_intersection() {
        let forward = forward_chain(&["/wiki/A", "/wiki/C"]);
        let backward = backward_chain(&["/wiki/B", "/wiki/D"]);
        assert_eq!(intersect(&forward, &backward), None);
    }

    #[test]
    fn test_meeting_point_across_direction_tags() {
        let forward = forward_chain(&["/wiki/A", "/wiki/C", "/wiki/E"]);
        let backward = backward_chain(&["/wiki/B", "/wiki/D", "/wiki/E"]);
        assert_eq!(
            intersect(&forward, &backward),
            Some(Meeting::At("/wiki/E".to_string()))
        );
    }

    #[test]
    fn test_adjacent_origins_short_circuit() {
        // Forward saw B (the backward origin) and backward saw A (the
        // forward origin); other shared identities must not matter.
        let forward = forward_chain(&["/wiki/A", "/wiki/X", "/wiki/B"]);
        let backward = backward_chain(&["/wiki/B", "/wiki/X", "/wiki/A"]);
        assert_eq!(intersect(&forward, &backward), Some(Meeting::Adjacent));
    }

    #[test]
    fn test_tie_break_is_first_forward_discovery() {
        let forward = forward_chain(&["/wiki/A", "/wiki/Y", "/wiki/X"]);
        let backward = backward_chain(&["/wiki/B", "/wiki/X", "/wiki/Y"]);
        // Both X and Y are shared; the forward frontier discovered Y first.
        assert_eq!(
            intersect(&forward, &backward),
            Some(Meeting::At("/wiki/Y".to_string()))
        );
    }

    #[test]
    fn test_unseeded_frontier_never_intersects() {
        let forward = forward_chain(&["/wiki/A"]);
        let backward = Frontier::new(Direction::Backward);
        assert_eq!(intersect(&forward, &backward), None);
    }
}
