use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::Money;

/// Remaining advance per contributor, in the order contributors first paid in.
pub type Holdings = IndexMap<String, Money>;

/// Advance funds held by treasurers: treasurer -> contributor -> remaining.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdvancePool {
    treasurers: IndexMap<String, Holdings>,
}

impl AdvancePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&mut self, treasurer: &str, contributor: &str, amount: Money) {
        *self
            .treasurers
            .entry(treasurer.to_string())
            .or_default()
            .entry(contributor.to_string())
            .or_insert_with(Money::zero) += amount;
    }

    /// Holdings of a treasurer, `None` if nobody ever advanced them anything.
    pub fn holdings(&self, treasurer: &str) -> Option<&Holdings> {
        self.treasurers.get(treasurer).filter(|h| !h.is_empty())
    }

    pub fn remaining(&self, treasurer: &str, contributor: &str) -> Money {
        self.treasurers
            .get(treasurer)
            .and_then(|h| h.get(contributor))
            .copied()
            .unwrap_or_else(Money::zero)
    }

    pub fn total_held(&self, treasurer: &str) -> Money {
        self.treasurers
            .get(treasurer)
            .map(|h| h.values().sum())
            .unwrap_or_else(Money::zero)
    }

    /// Overwrites a treasurer's entries with post-allocation values.
    ///
    /// Contributors missing from `remaining` keep their entry untouched.
    pub(crate) fn rewrite(&mut self, treasurer: &str, remaining: &Holdings) {
        if let Some(holdings) = self.treasurers.get_mut(treasurer) {
            for (contributor, amount) in holdings.iter_mut() {
                if let Some(left) = remaining.get(contributor) {
                    *amount = *left;
                }
            }
        }
    }
}
