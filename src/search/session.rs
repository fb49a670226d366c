// Tue Feb 10 2026 - Alex

use log::{debug, warn};

use crate::canonical::{canonicalize, is_link_admissible, mark_backward};
use crate::config::SearchConfig;
use crate::frontier::{Direction, Frontier, NodeId};
use crate::search::error::SearchError;
use crate::search::intersect::intersect;
use crate::search::path::reconstruct_path;

/// A successfully fetched and parsed page, reported by the collaborator.
#[derive(Debug, Clone)]
pub struct PageEvent {
    pub direction: Direction,
    pub fetched_label: String,
    pub outbound_labels: Vec<String>,
}

/// A failed fetch. The frontier stalls on that one node; retry, if any,
/// belongs to the fetch collaborator.
#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub direction: Direction,
    pub reason: String,
}

/// What the session wants fetched next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchDirective {
    pub direction: Direction,
    pub raw_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Seeding,
    Expanding,
    Found(Vec<String>),
    Exhausted,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Found(_) | SessionState::Exhausted)
    }
}

/// One bidirectional search: both frontiers plus the coordinator state
/// machine. Constructed per search; independent sessions do not share
/// anything. All admission and intersection checks run on the caller's
/// thread, one event at a time.
pub struct SearchSession {
    config: SearchConfig,
    forward: Frontier,
    backward: Frontier,
    state: SessionState,
    forward_in_flight: bool,
    backward_in_flight: bool,
}

impl SearchSession {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            forward: Frontier::new(Direction::Forward),
            backward: Frontier::new(Direction::Backward),
            state: SessionState::Seeding,
            forward_in_flight: false,
            backward_in_flight: false,
        }
    }

    /// Seeds one frontier's origin. The backward origin is stored in its
    /// direction-tagged form so its fetches walk inbound links. Once both
    /// origins are set the session starts expanding and returns the first
    /// fetch directives.
    pub fn seed(
        &mut self,
        direction: Direction,
        raw_label: &str,
    ) -> Result<Vec<FetchDirective>, SearchError> {
        if self.state != SessionState::Seeding {
            warn!("{} seed '{}' ignored: session is past seeding", direction, raw_label);
            return Ok(Vec::new());
        }

        let label = match direction {
            Direction::Forward => raw_label.to_string(),
            Direction::Backward => mark_backward(raw_label),
        };
        self.frontier_mut(direction).seed_origin(&label)?;

        if self.forward.origin().is_some() && self.backward.origin().is_some() {
            self.state = SessionState::Expanding;
            return Ok(self.issue_directives());
        }
        Ok(Vec::new())
    }

    /// Feeds one fetched page into its frontier, checks for a meeting, and
    /// decides what to fetch next. Events arriving after the session turned
    /// terminal are discarded without admission.
    pub fn handle_page(&mut self, event: PageEvent) -> Result<Vec<FetchDirective>, SearchError> {
        if self.state.is_terminal() {
            debug!(
                "discarding late {} event for '{}'",
                event.direction, event.fetched_label
            );
            return Ok(Vec::new());
        }
        if self.state == SessionState::Seeding {
            warn!(
                "{} event for '{}' before both origins are seeded; dropped",
                event.direction, event.fetched_label
            );
            return Ok(Vec::new());
        }

        self.set_in_flight(event.direction, false);

        let identity = canonicalize(&event.fetched_label);
        let Some(parent) = self.frontier(event.direction).find_by_identity(&identity) else {
            warn!(
                "{} event for unadmitted page '{}'; dropped",
                event.direction, identity
            );
            return Ok(self.issue_directives());
        };

        let admitted = self.admit_batch(event.direction, parent, &event.outbound_labels);
        debug!(
            "{}: {} of {} links admitted from '{}'",
            event.direction,
            admitted,
            event.outbound_labels.len(),
            identity
        );

        if let Some(meeting) = intersect(&self.forward, &self.backward) {
            let route = reconstruct_path(&self.forward, &self.backward, &meeting)?;
            debug!("route found with {} hops", route.len().saturating_sub(1));
            self.state = SessionState::Found(route);
            return Ok(Vec::new());
        }

        if self.node_total() > self.config.max_nodes {
            warn!(
                "node budget of {} exceeded; abandoning search",
                self.config.max_nodes
            );
            self.state = SessionState::Exhausted;
            return Ok(Vec::new());
        }

        Ok(self.issue_directives())
    }

    /// A fetch error frees the in-flight slot and the search moves on.
    pub fn handle_failure(&mut self, failure: &FetchFailure) -> Vec<FetchDirective> {
        if self.state != SessionState::Expanding {
            return Vec::new();
        }
        warn!("{} fetch failed: {}", failure.direction, failure.reason);
        self.set_in_flight(failure.direction, false);
        self.issue_directives()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn found_route(&self) -> Option<&[String]> {
        match &self.state {
            SessionState::Found(route) => Some(route),
            _ => None,
        }
    }

    pub fn forward(&self) -> &Frontier {
        &self.forward
    }

    pub fn backward(&self) -> &Frontier {
        &self.backward
    }

    pub fn node_total(&self) -> usize {
        self.forward.node_count() + self.backward.node_count()
    }

    fn admit_batch(&mut self, direction: Direction, parent: NodeId, labels: &[String]) -> usize {
        let frontier = self.frontier_mut(direction);
        let mut admitted = 0;
        for label in labels {
            if !is_link_admissible(&canonicalize(label)) {
                continue;
            }
            if frontier.try_admit(parent, label) {
                admitted += 1;
            }
        }
        admitted
    }

    /// Expansion-order heuristic: advance whichever idle frontier has fewer
    /// admitted nodes first, ties forward-first. When nothing can advance
    /// and nothing is in flight, the search is exhausted.
    fn issue_directives(&mut self) -> Vec<FetchDirective> {
        let order = if self.backward.node_count() < self.forward.node_count() {
            [Direction::Backward, Direction::Forward]
        } else {
            [Direction::Forward, Direction::Backward]
        };

        let mut directives = Vec::new();
        for direction in order {
            if self.in_flight(direction) {
                continue;
            }
            if let Some(raw_label) = self.advance_for_fetch(direction) {
                self.set_in_flight(direction, true);
                directives.push(FetchDirective { direction, raw_label });
            }
        }

        if directives.is_empty() && !self.forward_in_flight && !self.backward_in_flight {
            debug!("both pending queues exhausted with no meeting point");
            self.state = SessionState::Exhausted;
        }
        directives
    }

    /// Pops pending nodes until one below the depth cap turns up. Nodes at
    /// the cap stay admitted (they can still be meeting points) but are
    /// never sent out for expansion.
    fn advance_for_fetch(&mut self, direction: Direction) -> Option<String> {
        let max_depth = self.config.max_depth;
        let frontier = self.frontier_mut(direction);
        loop {
            let id = frontier.advance().ok()?;
            let node = frontier.node(id);
            if node.distance() >= max_depth {
                debug!(
                    "{}: '{}' at depth {} held back by depth cap",
                    direction,
                    node.identity(),
                    node.distance()
                );
                continue;
            }
            return Some(node.raw_label().to_string());
        }
    }

    fn frontier(&self, direction: Direction) -> &Frontier {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }

    fn frontier_mut(&mut self, direction: Direction) -> &mut Frontier {
        match direction {
            Direction::Forward => &mut self.forward,
            Direction::Backward => &mut self.backward,
        }
    }

    fn in_flight(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.forward_in_flight,
            Direction::Backward => self.backward_in_flight,
        }
    }

    fn set_in_flight(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Forward => self.forward_in_flight = value,
            Direction::Backward => self.backward_in_flight = value,
        }
    }
}
