//! Branch-and-Bound Settlement Search
//!
//! Explores sequences of pairwise transfers depth-first and keeps the
//! complete settlement with the fewest transactions seen so far.
//!
//! # Algorithm
//!
//! ```text
//! explore(ledger):
//!   1. fully settled?            → offer as candidate, return
//!   2. budget spent and best?    → return (cooperative cutoff)
//!   3. for (i, j), i < j, ascending:
//!        best ≤ current + 1?     → stop this level (bound)
//!        attempt_transfer(i, j)  → explore, undo
//! ```
//!
//! Every successful transfer adds exactly one transaction, so a branch that
//! already sits one below the best cost cannot produce anything cheaper.
//!
//! # Branch Isolation
//!
//! One ledger is mutated in place. Each applied transfer is reverted with
//! `Ledger::undo_transfer` when its subtree returns, so sibling branches never
//! observe each other's changes and the caller gets its ledger back untouched.
//!
//! # Tie-Breaking
//!
//! Only strictly cheaper solutions replace the best, so the first minimal
//! solution under ascending `(i, j)` enumeration is the one kept.

use crate::core::time::SearchClock;
use crate::models::{Ledger, SearchEvent, SearchEventLog};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

// ============================================================================
// Configuration Types
// ============================================================================

/// Default wall-clock budget for one search run
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(60);

/// Configuration for one search run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Hard wall-clock cutoff (None = run to exhaustion)
    pub time_budget: Option<Duration>,

    /// Apply the `best ≤ current + 1` bound
    ///
    /// Disabling it gives a plain exhaustive search, useful to verify the
    /// bound never discards an optimal branch.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: Some(DEFAULT_TIME_BUDGET),
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Exhaustive configuration: no deadline, no pruning
    pub fn exhaustive() -> Self {
        Self {
            time_budget: None,
            pruning: false,
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// A complete settlement: every balance is within epsilon of zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Ledger with final balances and per-person settlement events
    pub ledger: Ledger,

    /// Number of transfers (events / 2)
    pub transaction_count: usize,
}

/// How a search run ended
///
/// `Found` with zero transactions means the input was already settled.
/// `NotFound` means no complete settlement was reached at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Solution),
    NotFound,
}

impl SearchOutcome {
    /// Check if a complete settlement was found
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Borrow the solution, if any
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::NotFound => None,
        }
    }

    /// Take the solution, if any
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Counters collected during one search run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Recursive invocations
    pub nodes_visited: u64,

    /// Successful transfers applied (each one undone on backtrack)
    pub transfers_applied: u64,

    /// Levels abandoned because of the bound
    pub pruned_levels: u64,

    /// States with open balances but no eligible pair
    pub dead_ends: u64,

    /// Number of times the best solution was replaced
    pub improvements: usize,

    /// Whether the time budget cut the search short
    pub deadline_hit: bool,

    /// Wall-clock time spent searching
    pub elapsed_ms: u64,
}

/// Everything a search run produces
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    pub events: SearchEventLog,
}

// ============================================================================
// Search Context
// ============================================================================

/// Explicit state threaded through every recursive call
///
/// Holds the clock, the best complete solution so far and the run's
/// statistics. The best solution and its cost are one field, so they are
/// always observed together.
#[derive(Debug)]
pub struct SearchContext {
    clock: SearchClock,
    pruning: bool,
    best: Option<Solution>,
    stats: SearchStats,
    events: SearchEventLog,
}

impl SearchContext {
    /// Create a context and start its clock now
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            clock: SearchClock::start(config.time_budget),
            pruning: config.pruning,
            best: None,
            stats: SearchStats::default(),
            events: SearchEventLog::new(),
        }
    }

    /// Cost of the best solution so far
    pub fn best_cost(&self) -> Option<usize> {
        self.best.as_ref().map(|s| s.transaction_count)
    }

    /// Counters so far
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run the search from `ledger`
    ///
    /// The ledger is mutated during the run and restored before returning.
    pub fn run(&mut self, ledger: &mut Ledger) {
        self.explore(ledger);
        self.stats.elapsed_ms = millis(self.clock.elapsed());
    }

    /// Consume the context and produce the result
    pub fn finish(self) -> SearchResult {
        let outcome = match self.best {
            Some(solution) => SearchOutcome::Found(solution),
            None => SearchOutcome::NotFound,
        };
        SearchResult {
            outcome,
            stats: self.stats,
            events: self.events,
        }
    }

    fn explore(&mut self, ledger: &mut Ledger) {
        self.stats.nodes_visited += 1;

        if ledger.is_fully_settled() {
            self.offer(ledger);
            return;
        }

        if self.deadline_passed() {
            return;
        }

        let current = ledger.transaction_count();
        let n = ledger.len();
        let mut branched = false;
        let mut bounded = false;

        'pairs: for i in 0..n {
            for j in (i + 1)..n {
                if self.pruning && self.best_cost().is_some_and(|best| best <= current + 1) {
                    self.stats.pruned_levels += 1;
                    bounded = true;
                    break 'pairs;
                }

                if !ledger.attempt_transfer(i, j) {
                    continue;
                }
                self.stats.transfers_applied += 1;
                branched = true;

                self.explore(ledger);
                ledger.undo_transfer();
            }
        }

        if !branched && !bounded {
            self.stats.dead_ends += 1;
        }
    }

    /// Adopt `ledger` as the best solution if it is strictly cheaper
    fn offer(&mut self, ledger: &Ledger) {
        let cost = ledger.transaction_count();
        if self.best_cost().is_some_and(|best| best <= cost) {
            return;
        }

        self.best = Some(Solution {
            ledger: ledger.clone(),
            transaction_count: cost,
        });
        self.stats.improvements += 1;
        self.events.log(SearchEvent::SolutionImproved {
            node: self.stats.nodes_visited,
            cost,
            elapsed_ms: millis(self.clock.elapsed()),
        });
        info!(
            transaction_count = cost,
            node = self.stats.nodes_visited,
            remaining_ms = ?self.clock.remaining().map(millis),
            "Found solution with fewer transactions"
        );
    }

    /// Budget spent with a solution in hand
    fn deadline_passed(&mut self) -> bool {
        let Some(best_cost) = self.best_cost() else {
            return false;
        };
        if !self.clock.is_expired() {
            return false;
        }

        if !self.stats.deadline_hit {
            self.stats.deadline_hit = true;
            let elapsed_ms = millis(self.clock.elapsed());
            self.events.log(SearchEvent::DeadlineReached {
                node: self.stats.nodes_visited,
                best_cost,
                elapsed_ms,
            });
            warn!(
                best_cost,
                elapsed_ms, "Search budget exhausted, returning best solution so far"
            );
        }
        true
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// Entry Point
// ============================================================================

/// Search for the settlement with the fewest transactions
///
/// # Example
///
/// ```rust
/// use settlement_planner_core_rs::{Ledger, settlement::{search, SearchConfig}};
///
/// let ledger = Ledger::from_balances([("A", 100), ("B", -40), ("C", -60)], 1).unwrap();
/// let result = search(&ledger, &SearchConfig::default());
///
/// let solution = result.outcome.solution().unwrap();
/// assert_eq!(solution.transaction_count, 2);
/// assert!(solution.ledger.is_fully_settled());
/// ```
pub fn search(ledger: &Ledger, config: &SearchConfig) -> SearchResult {
    let mut working = ledger.clone();
    let mut context = SearchContext::new(config);

    debug!(
        people = working.len(),
        epsilon = working.epsilon(),
        pruning = config.pruning,
        "Starting settlement search"
    );
    context.run(&mut working);
    debug_assert_eq!(&working, ledger);

    let result = context.finish();
    debug!(
        found = result.outcome.is_found(),
        nodes = result.stats.nodes_visited,
        elapsed_ms = result.stats.elapsed_ms,
        "Settlement search finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_restores_ledger_after_run() {
        let original = Ledger::from_balances([("A", 30), ("B", 10), ("C", -20), ("D", -20)], 1)
            .unwrap();
        let mut working = original.clone();
        let mut context = SearchContext::new(&SearchConfig::default());

        context.run(&mut working);

        assert_eq!(working, original);
        assert_eq!(context.best_cost(), Some(3));
    }

    #[test]
    fn test_dead_end_counted_when_no_pair_is_eligible() {
        let ledger = Ledger::from_balances([("A", 3_000), ("B", -1_500)], 2_000).unwrap();
        let result = search(&ledger, &SearchConfig::default());

        assert_eq!(result.outcome, SearchOutcome::NotFound);
        assert_eq!(result.stats.dead_ends, 1);
        assert_eq!(result.stats.nodes_visited, 1);
    }
}
