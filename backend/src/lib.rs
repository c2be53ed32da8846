//! Settlement Planner Core - Rust Engine
//!
//! Computes the smallest set of pairwise transfers that settles a group's
//! debts, given each person's net balance.
//!
//! # Architecture
//!
//! - **core**: Wall-clock search budget
//! - **models**: Domain types (Person, Transaction, Ledger, search events)
//! - **settlement**: Branch-and-bound search engine
//! - **planner**: Validation, run identity and plan reports
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (minor currency units)
//! 2. Transfers conserve the sum of balances
//! 3. Search state is explicit; no globals, safe to run repeatedly

// Module declarations
pub mod core;
pub mod models;
pub mod planner;
pub mod settlement;

// Re-exports for convenience
pub use crate::core::time::SearchClock;
pub use models::{
    event::{SearchEvent, SearchEventLog},
    ledger::{sign_class, Ledger, LedgerError, SignClass, Transfer},
    person::Person,
    transaction::Transaction,
};
pub use planner::{
    PersonConfig, PlanError, PlanReport, Planner, PlannerConfig, Scenario, SettlementPlan,
};
pub use settlement::{search, SearchConfig, SearchOutcome, SearchResult, SearchStats, Solution};
