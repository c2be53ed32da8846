//! Planner - validated entry point for settlement planning
//!
//! Wraps the search engine with config validation, the conservation
//! precondition, run identity and serializable reports.
//!
//! See `engine.rs` for the planning flow.

pub mod engine;
pub mod report;
pub mod scenario;

// Re-export main types for convenience
pub use engine::{
    PersonConfig, PlanError, Planner, PlannerConfig, SettlementPlan, DEFAULT_EPSILON,
    DEFAULT_TIME_BUDGET_SECS,
};
pub use report::{compute_input_digest, EventReport, PersonReport, PlanReport, TransferReport};
pub use scenario::Scenario;
