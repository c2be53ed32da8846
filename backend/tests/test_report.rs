//! Plan Report Tests
//!
//! Name resolution, transfer flattening and JSON round-trip of reports.

use settlement_planner_core_rs::{
    planner::{EventReport, TransferReport},
    PersonConfig, PlanReport, Planner, PlannerConfig,
};

fn plan_report(balances: &[(&str, i64)], epsilon: i64) -> PlanReport {
    let people: Vec<PersonConfig> = balances
        .iter()
        .map(|(name, balance)| PersonConfig::new(*name, *balance))
        .collect();
    let config = PlannerConfig {
        epsilon,
        time_budget_secs: None,
        pruning: true,
    };

    Planner::new(config).unwrap().plan(&people).unwrap().report()
}

#[test]
fn test_report_resolves_counterparty_names() {
    let report = plan_report(&[("Adi", 100), ("Bari", -40), ("Csaba", -60)], 1);

    assert!(report.found);
    assert_eq!(report.transaction_count, Some(2));

    let adi = &report.people[0];
    assert_eq!(adi.name, "Adi");
    assert_eq!(adi.remaining, 0);
    assert_eq!(
        adi.events,
        vec![
            EventReport {
                counterparty: "Bari".to_string(),
                amount: -40,
            },
            EventReport {
                counterparty: "Csaba".to_string(),
                amount: -60,
            },
        ]
    );

    let bari = &report.people[1];
    assert_eq!(
        bari.events,
        vec![EventReport {
            counterparty: "Adi".to_string(),
            amount: 40,
        }]
    );
}

#[test]
fn test_report_flattens_transfers_in_order() {
    let report = plan_report(&[("A", 50), ("B", 50), ("C", -100)], 1);

    assert_eq!(
        report.transfers,
        vec![
            TransferReport {
                from: "C".to_string(),
                to: "A".to_string(),
                amount: 50,
            },
            TransferReport {
                from: "C".to_string(),
                to: "B".to_string(),
                amount: 50,
            },
        ]
    );
    assert_eq!(report.improvements.last(), Some(&2));
}

#[test]
fn test_not_found_report_shows_initial_balances() {
    let report = plan_report(&[("A", 3_000), ("B", -1_500)], 2_000);

    assert!(!report.found);
    assert_eq!(report.transaction_count, None);
    assert!(report.transfers.is_empty());
    assert_eq!(report.people[0].remaining, 3_000);
    assert_eq!(report.people[1].remaining, -1_500);
}

#[test]
fn test_report_json_round_trip() {
    let report = plan_report(&[("A", 100), ("B", -40), ("C", -60)], 1);

    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: PlanReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, report);
    assert!(json.contains("\"input_digest\""));
}
