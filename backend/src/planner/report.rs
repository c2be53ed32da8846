//! Plan Report - serializable snapshot of a settlement plan
//!
//! Converts index-based ledger state into a name-based document suitable for
//! JSON output, and fingerprints the input that produced it.
//!
//! # Critical Invariants
//!
//! - **Attribution**: `input_digest` depends only on config and roster, so two
//!   runs over the same input carry the same digest
//! - **Symmetry**: every transfer appears once in `transfers` and twice in the
//!   per-person event lists (once per party)

use crate::models::ledger::Ledger;
use crate::models::person::Person;
use crate::planner::engine::{PersonConfig, PlanError, PlannerConfig, SettlementPlan};
use crate::settlement::SearchStats;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete plan snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Run that produced this report
    pub run_id: Uuid,

    /// SHA256 of config + roster
    pub input_digest: String,

    /// Whether a complete settlement was found
    pub found: bool,

    /// Transfers in the best solution (None when not found)
    pub transaction_count: Option<usize>,

    /// Final per-person state (initial state when not found)
    pub people: Vec<PersonReport>,

    /// Flattened transfers in application order
    pub transfers: Vec<TransferReport>,

    /// Costs of each adopted solution, in adoption order
    pub improvements: Vec<usize>,

    /// Search counters
    pub stats: SearchStats,
}

/// Per-person snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonReport {
    pub name: String,
    pub remaining: i64,
    pub events: Vec<EventReport>,
}

/// One settlement event seen from its owner's side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReport {
    pub counterparty: String,
    pub amount: i64,
}

/// One transfer: `from` pays `to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReport {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

impl PersonReport {
    /// Snapshot `person`, resolving counterparty indices through `ledger`
    pub fn new(person: &Person, ledger: &Ledger) -> Self {
        PersonReport {
            name: person.name().to_string(),
            remaining: person.balance(),
            events: person
                .transactions()
                .iter()
                .map(|tx| EventReport {
                    counterparty: name_at(ledger, tx.counterparty()),
                    amount: tx.amount(),
                })
                .collect(),
        }
    }
}

impl From<&SettlementPlan> for PlanReport {
    fn from(plan: &SettlementPlan) -> Self {
        let ledger = plan
            .solution()
            .map(|s| &s.ledger)
            .unwrap_or(&plan.initial);

        PlanReport {
            run_id: plan.run_id,
            input_digest: plan.input_digest.clone(),
            found: plan.is_found(),
            transaction_count: plan.transaction_count(),
            people: ledger
                .people()
                .iter()
                .map(|p| PersonReport::new(p, ledger))
                .collect(),
            transfers: ledger
                .applied_transfers()
                .iter()
                .map(|t| TransferReport {
                    from: name_at(ledger, t.debtor),
                    to: name_at(ledger, t.creditor),
                    amount: t.amount,
                })
                .collect(),
            improvements: plan.events.improvement_costs(),
            stats: plan.stats.clone(),
        }
    }
}

fn name_at(ledger: &Ledger, index: usize) -> String {
    ledger
        .person(index)
        .map(|p| p.name().to_string())
        .unwrap_or_default()
}

// ============================================================================
// Input Hashing
// ============================================================================

#[derive(Serialize)]
struct DigestInput<'a> {
    config: &'a PlannerConfig,
    people: &'a [PersonConfig],
}

/// Compute deterministic SHA256 hash of config and roster
///
/// Both structures serialize with a fixed field order, so the JSON encoding
/// is canonical without re-sorting keys.
pub fn compute_input_digest(
    config: &PlannerConfig,
    people: &[PersonConfig],
) -> Result<String, PlanError> {
    let json = serde_json::to_vec(&DigestInput { config, people })
        .map_err(|e| PlanError::Serialization(format!("Input serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(&json);
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_input_digest_deterministic() {
        let config = PlannerConfig::default();
        let people = vec![PersonConfig::new("A", 10), PersonConfig::new("B", -10)];

        let first = compute_input_digest(&config, &people).unwrap();
        let second = compute_input_digest(&config, &people).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_compute_input_digest_differs_for_different_rosters() {
        let config = PlannerConfig::default();
        let a = vec![PersonConfig::new("A", 10), PersonConfig::new("B", -10)];
        let b = vec![PersonConfig::new("B", -10), PersonConfig::new("A", 10)];

        assert_ne!(
            compute_input_digest(&config, &a).unwrap(),
            compute_input_digest(&config, &b).unwrap()
        );
    }
}
