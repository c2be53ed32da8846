//! Ledger
//!
//! Holds the group's balances and the settlement history applied to them.
//! The search engine mutates one ledger in place: every successful transfer
//! is pushed onto an undo trail so it can be reverted exactly on backtrack.
//!
//! # Critical Invariants
//!
//! 1. **Balance Conservation**: A transfer never changes the sum of balances
//! 2. **Zeroing**: After a transfer, at least one of the two parties is at zero
//! 3. **Symmetric History**: Each transfer records one event per party, with
//!    amounts that are exact negatives of each other
//! 4. **Exact Undo**: `undo_transfer` restores both balances and pops both events

use crate::models::person::Person;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building a ledger
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Duplicate person name: {0}")]
    DuplicatePerson(String),

    #[error("Epsilon must be at least 1, got {0}")]
    InvalidEpsilon(i64),

    #[error("Balance of {name} is out of range: {balance}")]
    BalanceOutOfRange { name: String, balance: i64 },
}

/// Sign of a balance, with anything below epsilon treated as zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignClass {
    Negative,
    Zero,
    Positive,
}

/// Classify a balance for transfer eligibility
///
/// Never used to size a transfer, only to decide whether one is allowed.
///
/// # Example
/// ```
/// use settlement_planner_core_rs::{sign_class, SignClass};
///
/// assert_eq!(sign_class(1_999, 2_000), SignClass::Zero);
/// assert_eq!(sign_class(-2_000, 2_000), SignClass::Negative);
/// assert_eq!(sign_class(50_000, 2_000), SignClass::Positive);
/// assert_eq!(sign_class(i64::MIN, 2_000), SignClass::Negative);
/// ```
pub fn sign_class(balance: i64, epsilon: i64) -> SignClass {
    if is_below(balance, epsilon) {
        SignClass::Zero
    } else if balance < 0 {
        SignClass::Negative
    } else {
        SignClass::Positive
    }
}

/// `|balance| < epsilon` without overflowing on `i64::MIN`
pub(crate) fn is_below(balance: i64, epsilon: i64) -> bool {
    u64::try_from(epsilon).map_or(false, |eps| balance.unsigned_abs() < eps)
}

/// A single applied transfer: `debtor` pays `creditor` exactly `amount`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Ledger index of the paying party (negative balance before transfer)
    pub debtor: usize,

    /// Ledger index of the receiving party (positive balance before transfer)
    pub creditor: usize,

    /// Amount moved (always positive)
    pub amount: i64,
}

/// Balances plus settlement history for a group
///
/// # Example
///
/// ```rust
/// use settlement_planner_core_rs::{Ledger, Person};
///
/// let mut ledger = Ledger::new(
///     vec![
///         Person::new("A".to_string(), 100),
///         Person::new("B".to_string(), -40),
///         Person::new("C".to_string(), -60),
///     ],
///     1,
/// )
/// .unwrap();
///
/// assert!(ledger.attempt_transfer(0, 1));
/// assert_eq!(ledger.person(0).unwrap().balance(), 60);
/// assert_eq!(ledger.person(1).unwrap().balance(), 0);
/// assert_eq!(ledger.transaction_count(), 1);
/// assert_eq!(ledger.total_balance(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// All people, in the order they were supplied (indices are stable)
    people: Vec<Person>,

    /// Threshold below which a balance counts as settled
    epsilon: i64,

    /// Transfers applied so far, most recent last
    trail: Vec<Transfer>,
}

impl Ledger {
    /// Build a ledger from people with opening balances
    ///
    /// # Errors
    ///
    /// - `InvalidEpsilon` if `epsilon < 1`
    /// - `DuplicatePerson` if two people share a name
    /// - `BalanceOutOfRange` for `i64::MIN`, which has no positive counterpart
    ///   to settle against
    pub fn new(people: Vec<Person>, epsilon: i64) -> Result<Self, LedgerError> {
        if epsilon < 1 {
            return Err(LedgerError::InvalidEpsilon(epsilon));
        }

        let mut seen = HashSet::with_capacity(people.len());
        for person in &people {
            if person.balance() == i64::MIN {
                return Err(LedgerError::BalanceOutOfRange {
                    name: person.name().to_string(),
                    balance: person.balance(),
                });
            }
            if !seen.insert(person.name()) {
                return Err(LedgerError::DuplicatePerson(person.name().to_string()));
            }
        }

        Ok(Self {
            people,
            epsilon,
            trail: Vec::new(),
        })
    }

    /// Build a ledger from `(name, balance)` pairs
    pub fn from_balances<I, S>(balances: I, epsilon: i64) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let people = balances
            .into_iter()
            .map(|(name, balance)| Person::new(name.into(), balance))
            .collect();
        Self::new(people, epsilon)
    }

    /// Threshold below which a balance counts as settled
    pub fn epsilon(&self) -> i64 {
        self.epsilon
    }

    /// All people, index order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Person at `index`
    pub fn person(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    /// Index of the person named `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|p| p.name() == name)
    }

    /// Number of people
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Check if the ledger has no people
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Sign class of a balance under this ledger's epsilon
    pub fn sign_class(&self, balance: i64) -> SignClass {
        sign_class(balance, self.epsilon)
    }

    /// Transfer that `attempt_transfer(i, j)` would apply, if any
    ///
    /// Returns `None` when:
    /// - `i == j` (no transfer with oneself) or either index is out of range
    /// - either balance is effectively zero
    /// - both balances have the same sign class
    pub fn eligible_transfer(&self, i: usize, j: usize) -> Option<Transfer> {
        if i == j {
            return None;
        }
        let a = self.people.get(i)?.balance();
        let b = self.people.get(j)?.balance();

        let class_a = self.sign_class(a);
        let class_b = self.sign_class(b);
        if class_a == SignClass::Zero || class_b == SignClass::Zero || class_a == class_b {
            return None;
        }

        let (debtor, creditor) = if a < b { (i, j) } else { (j, i) };
        let amount = (-self.people[debtor].balance()).min(self.people[creditor].balance());

        Some(Transfer {
            debtor,
            creditor,
            amount,
        })
    }

    /// Try to settle between `i` and `j`
    ///
    /// On success the debtor's balance rises by `amount` and the creditor's
    /// falls by `amount`, where `amount = min(-debtor, creditor)`. The debtor
    /// records `+amount` against the creditor, the creditor records `-amount`
    /// against the debtor. On failure nothing changes.
    ///
    /// # Returns
    ///
    /// - `true` if a transfer was applied
    /// - `false` if the pair is not eligible (see `eligible_transfer`)
    pub fn attempt_transfer(&mut self, i: usize, j: usize) -> bool {
        match self.eligible_transfer(i, j) {
            Some(transfer) => {
                self.apply(transfer);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, transfer: Transfer) {
        let Transfer {
            debtor,
            creditor,
            amount,
        } = transfer;
        self.people[debtor].apply(creditor, amount);
        self.people[creditor].apply(debtor, -amount);
        self.trail.push(transfer);
    }

    /// Revert the most recent transfer
    ///
    /// Restores both balances and pops both recorded events.
    /// Returns the reverted transfer, or `None` if nothing has been applied.
    pub fn undo_transfer(&mut self) -> Option<Transfer> {
        let transfer = self.trail.pop()?;
        let creditor_event = self.people[transfer.creditor].revert_last();
        let debtor_event = self.people[transfer.debtor].revert_last();
        debug_assert_eq!(
            creditor_event.map(|tx| (tx.counterparty(), tx.amount())),
            Some((transfer.debtor, -transfer.amount))
        );
        debug_assert_eq!(
            debtor_event.map(|tx| (tx.counterparty(), tx.amount())),
            Some((transfer.creditor, transfer.amount))
        );
        Some(transfer)
    }

    /// Transfers applied so far, in application order
    pub fn applied_transfers(&self) -> &[Transfer] {
        &self.trail
    }

    /// True iff every balance is below epsilon in magnitude
    pub fn is_fully_settled(&self) -> bool {
        self.people.iter().all(|p| p.is_settled(self.epsilon))
    }

    /// Number of transfers recorded (total events / 2)
    pub fn transaction_count(&self) -> usize {
        self.people
            .iter()
            .map(|p| p.transactions().len())
            .sum::<usize>()
            / 2
    }

    /// Sum of all balances (for invariant checking)
    ///
    /// # Returns
    ///
    /// Sum of all balances, widened to i128 so that rosters near the i64
    /// limits cannot overflow. This never changes across transfers.
    pub fn total_balance(&self) -> i128 {
        self.people.iter().map(|p| i128::from(p.balance())).sum()
    }
}
