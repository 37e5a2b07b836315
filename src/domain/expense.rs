use serde::Serialize;

use crate::domain::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    pub payer: String,
    pub amount: Money,
    pub participants: Vec<String>,
    pub reason: String,
    /// `round(amount / participants.len(), 2)`
    pub share: Money,
}

impl Expense {
    pub(crate) fn new(payer: &str, amount: Money, participants: &[&str], reason: &str) -> Self {
        Self {
            payer: payer.to_string(),
            amount,
            participants: participants.iter().map(|p| p.to_string()).collect(),
            reason: reason.to_string(),
            share: amount.split(participants.len()),
        }
    }
}
