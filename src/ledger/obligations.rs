use indexmap::IndexMap;

use crate::domain::Money;

/// Outstanding amounts keyed by counterparty.
pub type Edges = IndexMap<String, Money>;

/// Pairwise owes/gets graph between members of one trip.
///
/// `owes_to[a][b]` always equals `gets_from[b][a]`. Edges are strictly positive;
/// an edge brought to zero or below is removed, and self-edges are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObligationGraph {
    owes_to: IndexMap<String, Edges>,
    gets_from: IndexMap<String, Edges>,
}

impl ObligationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-creates empty rows so lookups never need defaulting.
    pub fn register(&mut self, member: &str) {
        self.owes_to.entry(member.to_string()).or_default();
        self.gets_from.entry(member.to_string()).or_default();
    }

    pub fn add(&mut self, debtor: &str, creditor: &str, amount: Money) {
        if debtor == creditor || !amount.is_positive() {
            return;
        }
        *self
            .owes_to
            .entry(debtor.to_string())
            .or_default()
            .entry(creditor.to_string())
            .or_insert_with(Money::zero) += amount;
        *self
            .gets_from
            .entry(creditor.to_string())
            .or_default()
            .entry(debtor.to_string())
            .or_insert_with(Money::zero) += amount;
    }

    /// Lowers the edge `debtor -> creditor` by `amount`, dropping it once exhausted.
    pub fn reduce(&mut self, debtor: &str, creditor: &str, amount: Money) {
        Self::reduce_edge(&mut self.owes_to, debtor, creditor, amount);
        Self::reduce_edge(&mut self.gets_from, creditor, debtor, amount);
    }

    fn reduce_edge(rows: &mut IndexMap<String, Edges>, from: &str, to: &str, amount: Money) {
        if let Some(row) = rows.get_mut(from) {
            if let Some(edge) = row.get_mut(to) {
                *edge -= amount;
                if !edge.is_positive() {
                    row.shift_remove(to);
                }
            }
        }
    }

    pub fn owed(&self, debtor: &str, creditor: &str) -> Money {
        self.owes_to
            .get(debtor)
            .and_then(|row| row.get(creditor))
            .copied()
            .unwrap_or_else(Money::zero)
    }

    pub fn owes_to(&self, member: &str) -> Edges {
        Self::row_without_self(&self.owes_to, member)
    }

    pub fn gets_from(&self, member: &str) -> Edges {
        Self::row_without_self(&self.gets_from, member)
    }

    fn row_without_self(rows: &IndexMap<String, Edges>, member: &str) -> Edges {
        rows.get(member)
            .map(|row| {
                row.iter()
                    .filter(|(other, _)| other.as_str() != member)
                    .map(|(other, amount)| (other.clone(), *amount))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn total_owed(&self, member: &str) -> Money {
        self.owes_to(member).values().sum()
    }

    pub fn total_due(&self, member: &str) -> Money {
        self.gets_from(member).values().sum()
    }

    pub fn net_position(&self, member: &str) -> Money {
        self.total_due(member) - self.total_owed(member)
    }
}
