use serde::Serialize;

use crate::domain::{Error, MemberSummary, Money};
use crate::ledger::obligations::Edges;
use crate::ledger::{ObligationGraph, Trip};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Settled,
    Pending,
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Status::Settled => f.write_str("Settled"),
            Status::Pending => f.write_str("Pending"),
        }
    }
}

/// Reporting row for one member, derived from the ledger on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummaryView {
    pub name: String,
    #[serde(flatten)]
    pub counters: MemberSummary,
    pub gets_back: Money,
    pub owes: Money,
    pub net: Money,
    pub status: Status,
    pub owes_to: Edges,
    pub gets_from: Edges,
}

pub fn project(name: &str, counters: &MemberSummary, graph: &ObligationGraph) -> MemberSummaryView {
    let owes_to = graph.owes_to(name);
    let gets_from = graph.gets_from(name);
    let gets_back: Money = gets_from.values().sum();
    let owes: Money = owes_to.values().sum();
    let status = if gets_back.is_zero() && owes.is_zero() {
        Status::Settled
    } else {
        Status::Pending
    };

    MemberSummaryView {
        name: name.to_string(),
        counters: counters.clone(),
        gets_back,
        owes,
        // both sums are whole paise, so the difference needs no rounding
        net: gets_back - owes,
        status,
        owes_to,
        gets_from,
    }
}

impl Trip {
    pub fn summary_for(&self, member: &str) -> Result<MemberSummaryView, Error> {
        let counters = self.members.get(member).ok_or_else(|| Error::UnknownMember {
            name: member.to_string(),
        })?;
        Ok(project(member, counters, &self.graph))
    }

    /// Every member's view, in the order members joined.
    pub fn all_summaries(&self) -> Vec<MemberSummaryView> {
        self.members
            .iter()
            .map(|(name, counters)| project(name, counters, &self.graph))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_member_is_settled() {
        let mut trip = Trip::new("Trip 1");
        trip.add_member("Alice").unwrap();

        let view = trip.summary_for("Alice").unwrap();
        assert_eq!(view.status, Status::Settled);
        assert_eq!(view.net, Money::zero());
        assert!(view.owes_to.is_empty() && view.gets_from.is_empty());
    }

    #[test]
    fn debtor_and_creditor_are_pending() {
        let mut trip = Trip::new("Trip 1");
        for m in ["Dave", "Eve", "Finn"] {
            trip.add_member(m).unwrap();
        }
        trip.record_expense("Dave", Money::from_units(100), &["Dave", "Eve", "Finn"], "fuel")
            .unwrap();

        let views = trip.all_summaries();
        let names: Vec<_> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Dave", "Eve", "Finn"]);

        let dave = &views[0];
        assert_eq!(dave.gets_back, Money::from_minor(6666));
        assert_eq!(dave.net, Money::from_minor(6666));
        assert_eq!(dave.status, Status::Pending);
        assert_eq!(views[1].owes, Money::from_minor(3333));
        assert_eq!(views[1].net, Money::from_minor(-3333));
        assert_eq!(views[1].status, Status::Pending);
    }

    #[test]
    fn unknown_member_has_no_summary() {
        let trip = Trip::new("Trip 1");
        assert!(matches!(trip.summary_for("Ghost"), Err(Error::UnknownMember { .. })));
    }
}
