use serde::Serialize;

use crate::domain::Money;

/// Running per-member counters of a trip.
///
/// Obligation edges live in the trip's [`ObligationGraph`](crate::ledger::ObligationGraph);
/// this struct only holds the advance and spend bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub advance_given: Money,            // advances this member handed to treasurers
    pub advance_received: Money,         // advances this member holds as treasurer
    pub advance_used_by_others: Money,   // this member's advances spent on other people's shares
    pub advance_used_from_others: Money, // other people's advances spent on this member's shares
    pub advance_balance: Money,          // advance_given - advance_used_by_others
    pub own_paid: Money,                 // shares of others this member covered directly as payer
    pub share: Money,                    // cumulative per-head share over all expenses joined
}

impl MemberSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync_balance(&mut self) {
        self.advance_balance = self.advance_given - self.advance_used_by_others;
    }
}
