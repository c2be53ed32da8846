//! Scenario input documents
//!
//! A scenario bundles a planner config with the roster to settle. JSON form:
//!
//! ```json
//! {
//!   "epsilon": 2000,
//!   "time_budget_secs": 60,
//!   "pruning": true,
//!   "people": [{ "name": "Adi", "balance": 93257 }]
//! }
//! ```
//!
//! Every config field is optional and falls back to `PlannerConfig::default()`.

use crate::planner::engine::{PersonConfig, PlanError, PlannerConfig};
use serde::{Deserialize, Serialize};

/// Config plus roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(flatten)]
    pub config: PlannerConfig,

    pub people: Vec<PersonConfig>,
}

impl Scenario {
    /// Parse a scenario from JSON
    ///
    /// # Example
    /// ```
    /// use settlement_planner_core_rs::planner::Scenario;
    ///
    /// let scenario = Scenario::from_json(
    ///     r#"{"epsilon": 1, "people": [{"name": "A", "balance": 5}, {"name": "B", "balance": -5}]}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(scenario.config.epsilon, 1);
    /// assert_eq!(scenario.people.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        serde_json::from_str(json)
            .map_err(|e| PlanError::Serialization(format!("Scenario parse failed: {}", e)))
    }

    /// Twelve-person group used when no scenario file is supplied
    pub fn demo() -> Self {
        let people = [
            ("Adi", 93_257),
            ("Bari", -43_208),
            ("Csaba", -95_615),
            ("Eszter", -49_075),
            ("Elena", -50_731),
            ("Kriszti", -88_122),
            ("Lili", -34_661),
            ("MP", -27_665),
            ("Norbi", 45_052),
            ("Szigi", -29_832),
            ("Tibi", 320_007),
            ("Zsuzsi", -39_401),
        ]
        .into_iter()
        .map(|(name, balance)| PersonConfig::new(name, balance))
        .collect();

        Self {
            config: PlannerConfig::default(),
            people,
        }
    }
}
