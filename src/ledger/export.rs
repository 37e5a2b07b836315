use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::{Expense, LogEntry, MemberSummary, Settlement};
use crate::ledger::obligations::Edges;
use crate::ledger::{AdvancePool, Trip};

#[derive(Debug, Clone, Serialize)]
pub struct MemberExport {
    #[serde(flatten)]
    pub counters: MemberSummary,
    pub owes_to: Edges,
    pub gets_from: Edges,
}

/// Everything an export collaborator needs to render a trip, in any format.
#[derive(Debug, Clone, Serialize)]
pub struct TripExport {
    pub members: Vec<String>,
    pub advances: AdvancePool,
    pub expenses: Vec<Expense>,
    pub transactions: Vec<LogEntry>,
    pub settlements: Vec<Settlement>,
    pub summary: IndexMap<String, MemberExport>,
}

impl Trip {
    pub fn export(&self) -> TripExport {
        let summary = self
            .members
            .iter()
            .map(|(name, counters)| {
                (
                    name.clone(),
                    MemberExport {
                        counters: counters.clone(),
                        owes_to: self.graph.owes_to(name),
                        gets_from: self.graph.gets_from(name),
                    },
                )
            })
            .collect();

        TripExport {
            members: self.members.keys().cloned().collect(),
            advances: self.pool.clone(),
            expenses: self.expenses.clone(),
            transactions: self.log.clone(),
            settlements: self.settlements.clone(),
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::Money;

    use super::*;

    #[test]
    fn export_serializes_ordered_ledger() {
        let mut trip = Trip::new("Trip 1");
        for m in ["Alice", "Bob"] {
            trip.add_member(m).unwrap();
        }
        trip.record_advance("Alice", "Bob", Money::from_units(100))
            .unwrap();
        trip.record_expense("Alice", Money::from_units(40), &["Alice", "Bob"], "tea")
            .unwrap();

        let value = serde_json::to_value(trip.export()).unwrap();

        assert_eq!(value["members"], json!(["Alice", "Bob"]));
        assert_eq!(value["advances"], json!({"Bob": {"Alice": "100.00"}}));
        assert_eq!(value["expenses"][0]["share"], json!("20.00"));
        assert_eq!(value["transactions"][1]["kind"], json!("Expense"));
        assert_eq!(value["summary"]["Bob"]["owes_to"], json!({"Alice": "20.00"}));
        assert_eq!(value["summary"]["Alice"]["own_paid"], json!("20.00"));
        assert_eq!(value["summary"]["Alice"]["advance_balance"], json!("100.00"));
        assert_eq!(value["settlements"], json!([]));
    }
}
