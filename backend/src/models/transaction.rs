//! Settlement event model
//!
//! A settlement event records one side of a transfer between two people.
//! Every transfer produces exactly two events, one per party, whose amounts
//! are exact negatives of each other.
//!
//! CRITICAL: All money values are i64 (minor currency units)

use serde::{Deserialize, Serialize};

/// One side of a transfer, as seen by the person it is recorded on
///
/// The counterparty is a stable index into the same ledger, not an owned
/// reference, so events stay valid across ledger clones.
///
/// # Example
/// ```
/// use settlement_planner_core_rs::Transaction;
///
/// let tx = Transaction::new(2, -40_000);
/// assert_eq!(tx.counterparty(), 2);
/// assert_eq!(tx.amount(), -40_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Ledger index of the other party
    counterparty: usize,

    /// Signed change applied to this person's balance
    /// Positive = balance went up (debtor paying off debt)
    /// Negative = balance went down (creditor being paid out)
    amount: i64,
}

impl Transaction {
    /// Create a new settlement event
    pub fn new(counterparty: usize, amount: i64) -> Self {
        Self {
            counterparty,
            amount,
        }
    }

    /// Ledger index of the other party
    pub fn counterparty(&self) -> usize {
        self.counterparty
    }

    /// Signed amount from this person's point of view
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The matching event recorded on the counterparty
    ///
    /// # Example
    /// ```
    /// use settlement_planner_core_rs::Transaction;
    ///
    /// // Person 0 recorded +500 against person 3
    /// let mirror = Transaction::new(3, 500).mirrored(0);
    /// assert_eq!(mirror, Transaction::new(0, -500));
    /// ```
    pub fn mirrored(&self, owner: usize) -> Self {
        Self::new(owner, -self.amount)
    }
}
