//! Settlement Module
//!
//! Finds the smallest set of pairwise transfers that zeroes every balance.
//!
//! # Critical Invariants
//!
//! 1. **Balance Conservation**: No transfer changes the sum of balances
//! 2. **Monotonic Improvement**: Each adopted solution is strictly cheaper than the last
//! 3. **Cooperative Cutoff**: The deadline is polled at the top of every recursive call
//!
//! # Example
//!
//! ```rust
//! use settlement_planner_core_rs::Ledger;
//! use settlement_planner_core_rs::settlement::{search, SearchConfig};
//!
//! let ledger = Ledger::from_balances([("A", 50), ("B", 50), ("C", -100)], 1).unwrap();
//! let result = search(&ledger, &SearchConfig::default());
//!
//! let solution = result.outcome.solution().unwrap();
//! assert_eq!(solution.transaction_count, 2);
//! assert_eq!(solution.ledger.total_balance(), 0);
//! ```

pub mod search;

// Re-export public API
pub use search::{
    search, SearchConfig, SearchContext, SearchOutcome, SearchResult, SearchStats, Solution,
    DEFAULT_TIME_BUDGET,
};
