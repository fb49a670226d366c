// Tue Feb 10 2026 - Alex

use crate::frontier::{Frontier, NodeId};
use crate::search::error::SearchError;
use crate::search::intersect::Meeting;

/// Stitches the two half-paths into one route, forward origin first,
/// backward origin last. Every element is a canonical identity; the meeting
/// point appears exactly once.
pub fn reconstruct_path(
    forward: &Frontier,
    backward: &Frontier,
    meeting: &Meeting,
) -> Result<Vec<String>, SearchError> {
    let forward_origin = forward
        .origin()
        .ok_or(SearchError::NotSeeded(forward.direction()))?;
    let backward_origin = backward
        .origin()
        .ok_or(SearchError::NotSeeded(backward.direction()))?;

    let identity = match meeting {
        Meeting::Adjacent => {
            return Ok(vec![
                forward_origin.identity().to_string(),
                backward_origin.identity().to_string(),
            ]);
        }
        Meeting::At(identity) => identity,
    };

    let mut route = Vec::new();

    // Forward half: the meeting node plus its ancestors, re-ordered so the
    // route reads origin -> ... -> meeting point.
    let mut cursor = Some(unique_match(forward, identity)?);
    while let Some(id) = cursor {
        let node = forward.node(id);
        route.push(node.identity().to_string());
        cursor = node.parent();
    }
    route.reverse();

    // Backward half: that frontier grew away from its own origin, so the
    // parent walk already reads meeting point -> backward origin. The
    // matched node itself is the pivot and is already in the route.
    let mut cursor = backward.node(unique_match(backward, identity)?).parent();
    while let Some(id) = cursor {
        let node = backward.node(id);
        route.push(node.identity().to_string());
        cursor = node.parent();
    }

    Ok(route)
}

/// At most one node per frontier may carry the meeting identity; a second
/// match means the admission invariant was violated upstream and the search
/// must abort rather than guess.
fn unique_match(frontier: &Frontier, identity: &str) -> Result<NodeId, SearchError> {
    let mut found = None;
    let mut count = 0;
    for (id, node) in frontier.iter() {
        if node.identity() == identity {
            count += 1;
            found.get_or_insert(id);
        }
    }
    match found {
        Some(id) if count == 1 => Ok(id),
        _ => Err(SearchError::InternalConsistency {
            direction: frontier.direction(),
            identity: identity.to_string(),
            count,
        }),
    }
}
