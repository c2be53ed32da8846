//! Search event logging for auditing a search run.
//!
//! Events capture the milestones of one branch-and-bound run so callers and
//! tests can inspect how the best solution evolved without scraping logs.
//!
//! # Event Types
//!
//! - **SolutionImproved**: a strictly cheaper complete settlement was adopted
//! - **DeadlineReached**: the time budget ran out and the search began unwinding
//!
//! # Example
//!
//! ```rust
//! use settlement_planner_core_rs::models::{SearchEvent, SearchEventLog};
//!
//! let mut log = SearchEventLog::new();
//! log.log(SearchEvent::SolutionImproved { node: 12, cost: 4, elapsed_ms: 0 });
//! log.log(SearchEvent::SolutionImproved { node: 90, cost: 3, elapsed_ms: 1 });
//!
//! assert_eq!(log.improvement_costs(), vec![4, 3]);
//! ```

use serde::{Deserialize, Serialize};

/// Milestone reached during a search run.
///
/// `node` is the number of search nodes visited when the event fired, which
/// orders events within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchEvent {
    /// A complete settlement cheaper than every earlier one was adopted
    SolutionImproved {
        node: u64,
        cost: usize,
        elapsed_ms: u64,
    },

    /// Budget exhausted with a best solution in hand
    DeadlineReached {
        node: u64,
        best_cost: usize,
        elapsed_ms: u64,
    },
}

impl SearchEvent {
    /// Node counter when the event fired
    pub fn node(&self) -> u64 {
        match self {
            SearchEvent::SolutionImproved { node, .. } => *node,
            SearchEvent::DeadlineReached { node, .. } => *node,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            SearchEvent::SolutionImproved { .. } => "SolutionImproved",
            SearchEvent::DeadlineReached { .. } => "DeadlineReached",
        }
    }
}

/// Ordered log of search events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEventLog {
    events: Vec<SearchEvent>,
}

impl SearchEventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: SearchEvent) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&SearchEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Costs of every adopted solution, in adoption order
    pub fn improvement_costs(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::SolutionImproved { cost, .. } => Some(*cost),
                _ => None,
            })
            .collect()
    }
}
