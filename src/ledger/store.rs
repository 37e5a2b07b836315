use indexmap::IndexMap;
use tracing::{debug, info};

use crate::domain::{
    Error, Expense, LogEntry, MemberSummary, Money, Settlement, TransactionKind,
};
use crate::ledger::allocator::{self, Funding};
use crate::ledger::{AdvancePool, ObligationGraph};

/// All bookkeeping of a single trip. Trips never share state.
#[derive(Debug, Clone, Default)]
pub struct Trip {
    pub(super) name: String,
    pub(super) members: IndexMap<String, MemberSummary>,
    pub(super) pool: AdvancePool,
    pub(super) graph: ObligationGraph,
    pub(super) expenses: Vec<Expense>,
    pub(super) settlements: Vec<Settlement>,
    pub(super) log: Vec<LogEntry>,
}

impl Trip {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_member(&mut self, name: &str) -> Result<(), Error> {
        if self.members.contains_key(name) {
            return Err(Error::DuplicateMember {
                name: name.to_string(),
            });
        }

        self.members.insert(name.to_string(), MemberSummary::new());
        self.graph.register(name);
        info!(trip = %self.name, member = name, "member added");
        Ok(())
    }

    pub fn record_advance(&mut self, from: &str, to: &str, amount: Money) -> Result<(), Error> {
        if from == to {
            return Err(Error::SelfAdvance {
                member: from.to_string(),
            });
        }
        if !amount.is_valid_entry() {
            return Err(Error::InvalidAmount { amount });
        }
        self.ensure_member(from)?;
        self.ensure_member(to)?;

        self.pool.deposit(to, from, amount);
        {
            let giver = self.member_mut(from)?;
            giver.advance_given += amount;
            giver.sync_balance();
        }
        self.member_mut(to)?.advance_received += amount;

        self.log.push(LogEntry::new(
            TransactionKind::Advance,
            format!("Advance: {} gave Rs. {} to {}", from, amount, to),
        ));
        info!(trip = %self.name, from, to, %amount, "advance recorded");
        Ok(())
    }

    /// Records an expense and funds every share from the payer's advances first.
    ///
    /// Validation happens up front; a rejected expense leaves the trip untouched.
    pub fn record_expense(
        &mut self,
        payer: &str,
        amount: Money,
        participants: &[&str],
        reason: &str,
    ) -> Result<(), Error> {
        if !amount.is_valid_entry() {
            return Err(Error::InvalidAmount { amount });
        }
        if participants.is_empty() {
            return Err(Error::EmptyParticipants);
        }
        self.ensure_member(payer)?;
        for (idx, person) in participants.iter().enumerate() {
            self.ensure_member(person)?;
            if participants[..idx].contains(person) {
                return Err(Error::DuplicateParticipant {
                    name: person.to_string(),
                });
            }
        }

        let expense = Expense::new(payer, amount, participants, reason);
        let allocation = allocator::allocate(&expense, self.pool.holdings(payer));

        for attribution in &allocation.attributions {
            debug!(
                trip = %self.name,
                participant = %attribution.participant,
                source = %attribution.source,
                amount = %attribution.amount,
                funding = ?attribution.funding,
                "share attributed"
            );
            if attribution.participant == attribution.source || !attribution.amount.is_positive() {
                continue;
            }

            self.graph
                .add(&attribution.participant, &attribution.source, attribution.amount);

            match attribution.funding {
                Funding::ContributorAdvance => {
                    self.member_mut(&attribution.participant)?
                        .advance_used_from_others += attribution.amount;
                    let contributor = self.member_mut(&attribution.source)?;
                    contributor.advance_used_by_others += attribution.amount;
                    contributor.sync_balance();
                }
                Funding::Payer => self.member_mut(payer)?.own_paid += attribution.amount,
                Funding::OwnAdvance => {}
            }
        }

        if let Some(remaining) = &allocation.remaining {
            self.pool.rewrite(payer, remaining);
        }
        for person in participants {
            self.member_mut(person)?.share += allocation.share;
        }

        self.log.push(LogEntry::new(
            TransactionKind::Expense,
            format!(
                "Expense: {} paid Rs. {} for {} - {}",
                payer,
                amount,
                participants.join(", "),
                reason
            ),
        ));
        info!(trip = %self.name, payer, %amount, share = %allocation.share, "expense recorded");
        self.expenses.push(expense);
        Ok(())
    }

    pub(super) fn ensure_member(&self, name: &str) -> Result<(), Error> {
        if self.members.contains_key(name) {
            Ok(())
        } else {
            Err(Error::UnknownMember {
                name: name.to_string(),
            })
        }
    }

    // callers validate membership first, so the error arm is never hit mid-mutation
    fn member_mut(&mut self, name: &str) -> Result<&mut MemberSummary, Error> {
        self.members
            .get_mut(name)
            .ok_or_else(|| Error::UnknownMember {
                name: name.to_string(),
            })
    }

    pub fn members(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.keys().map(String::as_str)
    }

    pub fn member(&self, name: &str) -> Option<&MemberSummary> {
        self.members.get(name)
    }

    pub fn advance_pool(&self) -> &AdvancePool {
        &self.pool
    }

    pub fn obligations(&self) -> &ObligationGraph {
        &self.graph
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn transaction_log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn net_position(&self, member: &str) -> Money {
        self.graph.net_position(member)
    }
}
