//! Planner Engine
//!
//! Entry point that turns a roster of balances into a settlement plan:
//!
//! ```text
//! 1. Validate config (epsilon, time budget)
//! 2. Build the ledger (unique names)
//! 3. Precondition: |sum of balances| < epsilon, else refuse to search
//! 4. Run the branch-and-bound search under the time budget
//! 5. Wrap outcome, statistics and run identity in a SettlementPlan
//! ```
//!
//! # Example
//!
//! ```rust
//! use settlement_planner_core_rs::planner::{PersonConfig, Planner, PlannerConfig};
//!
//! let config = PlannerConfig {
//!     epsilon: 1,
//!     ..PlannerConfig::default()
//! };
//! let planner = Planner::new(config).unwrap();
//!
//! let plan = planner
//!     .plan(&[
//!         PersonConfig::new("A", 100),
//!         PersonConfig::new("B", -40),
//!         PersonConfig::new("C", -60),
//!     ])
//!     .unwrap();
//!
//! assert!(plan.is_found());
//! assert_eq!(plan.transaction_count(), Some(2));
//! ```

use crate::models::ledger::{Ledger, LedgerError};
use crate::models::SearchEventLog;
use crate::planner::report::{compute_input_digest, PlanReport};
use crate::settlement::{search, SearchConfig, SearchOutcome, SearchStats, Solution};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, info_span, warn};
use uuid::Uuid;

// ============================================================================
// Configuration Types
// ============================================================================

/// Default threshold below which a balance counts as settled
pub const DEFAULT_EPSILON: i64 = 2000;

/// Default search budget in seconds
pub const DEFAULT_TIME_BUDGET_SECS: f64 = 60.0;

/// Planner configuration
///
/// # Fields
///
/// * `epsilon` - Balances below this magnitude count as settled (minor units)
/// * `time_budget_secs` - Wall-clock search budget (None = no cutoff)
/// * `pruning` - Apply the branch-and-bound cutoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub epsilon: i64,
    pub time_budget_secs: Option<f64>,
    pub pruning: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            time_budget_secs: Some(DEFAULT_TIME_BUDGET_SECS),
            pruning: true,
        }
    }
}

impl PlannerConfig {
    /// Validate and convert to a search configuration
    pub fn search_config(&self) -> Result<SearchConfig, PlanError> {
        if self.epsilon < 1 {
            return Err(PlanError::Ledger(LedgerError::InvalidEpsilon(self.epsilon)));
        }

        let time_budget = match self.time_budget_secs {
            Some(secs) => Some(Duration::try_from_secs_f64(secs).map_err(|e| {
                PlanError::InvalidConfig(format!("time_budget_secs {}: {}", secs, e))
            })?),
            None => None,
        };

        Ok(SearchConfig {
            time_budget,
            pruning: self.pruning,
        })
    }
}

/// One roster entry: a person and their opening balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonConfig {
    pub name: String,
    pub balance: i64,
}

impl PersonConfig {
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that abort a planning run before any search starts
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("Sum of balances is not zero: {sum} (epsilon {epsilon})")]
    Unbalanced { sum: i128, epsilon: i64 },

    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

// ============================================================================
// Plan
// ============================================================================

/// Result of one planning run
#[derive(Debug, Clone)]
pub struct SettlementPlan {
    /// Unique identifier for this run
    pub run_id: Uuid,

    /// SHA256 of the roster and config that produced this plan
    pub input_digest: String,

    /// Ledger as supplied, before any transfer
    pub initial: Ledger,

    /// Best settlement found, or NotFound
    pub outcome: SearchOutcome,

    /// Search counters
    pub stats: SearchStats,

    /// Improvement and deadline milestones
    pub events: SearchEventLog,
}

impl SettlementPlan {
    /// Check if a complete settlement was found
    pub fn is_found(&self) -> bool {
        self.outcome.is_found()
    }

    /// Best solution, if any
    pub fn solution(&self) -> Option<&Solution> {
        self.outcome.solution()
    }

    /// Number of transfers in the best solution
    pub fn transaction_count(&self) -> Option<usize> {
        self.solution().map(|s| s.transaction_count)
    }

    /// Serializable snapshot with names instead of indices
    pub fn report(&self) -> PlanReport {
        PlanReport::from(self)
    }
}

// ============================================================================
// Planner
// ============================================================================

/// Validates input and runs the settlement search
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
    search_config: SearchConfig,
}

impl Planner {
    /// Create a planner, validating the config up front
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        let search_config = config.search_config()?;
        Ok(Self {
            config,
            search_config,
        })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build the initial ledger and check the conservation precondition
    pub fn prepare(&self, people: &[PersonConfig]) -> Result<Ledger, PlanError> {
        if people.is_empty() {
            return Err(PlanError::EmptyRoster);
        }

        let ledger = Ledger::from_balances(
            people.iter().map(|p| (p.name.clone(), p.balance)),
            self.config.epsilon,
        )?;

        let sum = ledger.total_balance();
        if sum.abs() >= i128::from(self.config.epsilon) {
            return Err(PlanError::Unbalanced {
                sum,
                epsilon: self.config.epsilon,
            });
        }

        Ok(ledger)
    }

    /// Compute a settlement plan for `people`
    ///
    /// # Errors
    ///
    /// Only validation aborts a run: empty roster, duplicate names, bad
    /// epsilon, or balances that do not sum to within epsilon of zero.
    /// Dead ends and timeouts are reported through the plan's outcome.
    pub fn plan(&self, people: &[PersonConfig]) -> Result<SettlementPlan, PlanError> {
        let initial = self.prepare(people)?;
        let input_digest = compute_input_digest(&self.config, people)?;
        let run_id = Uuid::new_v4();

        let span = info_span!("plan", %run_id);
        let _guard = span.enter();

        info!(
            people = initial.len(),
            epsilon = self.config.epsilon,
            time_budget_secs = ?self.config.time_budget_secs,
            pruning = self.config.pruning,
            "Planning settlement"
        );

        let result = search(&initial, &self.search_config);

        match result.outcome.solution() {
            Some(solution) => info!(
                transaction_count = solution.transaction_count,
                nodes = result.stats.nodes_visited,
                elapsed_ms = result.stats.elapsed_ms,
                deadline_hit = result.stats.deadline_hit,
                "Settlement plan ready"
            ),
            None => warn!(
                nodes = result.stats.nodes_visited,
                elapsed_ms = result.stats.elapsed_ms,
                "No complete settlement found"
            ),
        }

        Ok(SettlementPlan {
            run_id,
            input_digest,
            initial,
            outcome: result.outcome,
            stats: result.stats,
            events: result.events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_documented_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.epsilon, 2000);
        assert_eq!(config.time_budget_secs, Some(60.0));
        assert!(config.pruning);
    }

    #[test]
    fn test_negative_time_budget_rejected() {
        let config = PlannerConfig {
            time_budget_secs: Some(-1.0),
            ..PlannerConfig::default()
        };
        assert!(matches!(
            Planner::new(config),
            Err(PlanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{"epsilon": 5}"#).unwrap();
        assert_eq!(config.epsilon, 5);
        assert_eq!(config.time_budget_secs, Some(60.0));
        assert!(config.pruning);
    }
}
