//! Domain models for the settlement planner

pub mod event;
pub mod ledger;
pub mod person;
pub mod transaction;

// Re-exports
pub use event::{SearchEvent, SearchEventLog};
pub use ledger::{sign_class, Ledger, LedgerError, SignClass, Transfer};
pub use person::Person;
pub use transaction::Transaction;
