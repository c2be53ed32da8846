//! Person (balance entry) model
//!
//! Represents one member of the group being settled.
//! Each person has:
//! - A unique name
//! - A net balance (i64 minor units): positive = owed money, negative = owes money
//! - The ordered settlement events applied so far
//!
//! CRITICAL: All money values are i64 (minor currency units)

use crate::models::ledger::is_below;
use crate::models::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// A balance entry in the ledger
///
/// # Example
/// ```
/// use settlement_planner_core_rs::Person;
///
/// let person = Person::new("Adi".to_string(), 93_257);
/// assert_eq!(person.name(), "Adi");
/// assert_eq!(person.balance(), 93_257);
/// assert!(person.transactions().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name within the ledger
    name: String,

    /// Current net balance (i64 minor units)
    balance: i64,

    /// Settlement events in the order they were applied
    transactions: Vec<Transaction>,
}

impl Person {
    /// Create a person with an opening balance and no history
    pub fn new(name: String, balance: i64) -> Self {
        Self {
            name,
            balance,
            transactions: Vec::new(),
        }
    }

    /// Person's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current net balance
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Settlement events applied to this person, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Whether the balance is below `epsilon` in magnitude
    pub fn is_settled(&self, epsilon: i64) -> bool {
        is_below(self.balance, epsilon)
    }

    /// Apply a signed change and record it against `counterparty`
    pub(crate) fn apply(&mut self, counterparty: usize, amount: i64) {
        self.balance += amount;
        self.transactions.push(Transaction::new(counterparty, amount));
    }

    /// Revert the most recent event, restoring the balance it changed
    pub(crate) fn revert_last(&mut self) -> Option<Transaction> {
        let last = self.transactions.pop()?;
        self.balance -= last.amount();
        Some(last)
    }
}
