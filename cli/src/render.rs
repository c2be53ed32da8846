//! Text rendering of settlement plans

use settlement_planner_core_rs::PlanReport;

/// Render one line per person followed by a summary line
///
/// ```text
/// Adi: (Bari -43208) (Csaba -50049) remains: 0
/// Bari: (Adi 43208) remains: 0
/// transactions: 11
/// ```
pub fn render_text(report: &PlanReport) -> String {
    let mut out = String::new();

    for person in &report.people {
        out.push_str(&format!("{}: ", person.name));
        for event in &person.events {
            out.push_str(&format!("({} {}) ", event.counterparty, event.amount));
        }
        out.push_str(&format!("remains: {}\n", person.remaining));
    }

    match report.transaction_count {
        Some(count) => out.push_str(&format!("transactions: {}\n", count)),
        None => out.push_str("no settlement found\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use settlement_planner_core_rs::{PersonConfig, Planner, PlannerConfig};

    fn report(balances: &[(&str, i64)], epsilon: i64) -> PlanReport {
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
    fn test_render_found_plan() {
        let text = render_text(&report(&[("A", 100), ("B", -40), ("C", -60)], 1));

        assert_eq!(
            text,
            "A: (B -40) (C -60) remains: 0\n\
             B: (A 40) remains: 0\n\
             C: (A 60) remains: 0\n\
             transactions: 2\n"
        );
    }

    #[test]
    fn test_render_not_found_plan() {
        let text = render_text(&report(&[("A", 3_000), ("B", -1_500)], 2_000));

        assert_eq!(
            text,
            "A: remains: 3000\n\
             B: remains: -1500\n\
             no settlement found\n"
        );
    }
}
