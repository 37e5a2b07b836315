use tracing::info;

use crate::domain::{Clock, Error, LogEntry, Money, Settlement, SystemClock, TransactionKind};
use crate::ledger::Trip;

impl Trip {
    /// Pays `amount` from `from` to `to` against their outstanding obligation.
    ///
    /// The amount must not exceed what is owed; callers clamp, this rejects.
    pub fn settle(
        &mut self,
        from: &str,
        to: &str,
        amount: Money,
        note: Option<&str>,
    ) -> Result<(), Error> {
        self.settle_with_clock(from, to, amount, note, &SystemClock)
    }

    pub fn settle_with_clock<C: Clock>(
        &mut self,
        from: &str,
        to: &str,
        amount: Money,
        note: Option<&str>,
        clock: &C,
    ) -> Result<(), Error> {
        if !amount.is_valid_entry() {
            return Err(Error::InvalidAmount { amount });
        }
        self.ensure_member(from)?;
        self.ensure_member(to)?;

        let outstanding = self.graph.owed(from, to);
        if !outstanding.is_positive() {
            return Err(Error::NoObligation {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if amount > outstanding {
            return Err(Error::Overpayment {
                from: from.to_string(),
                to: to.to_string(),
                amount,
                outstanding,
            });
        }

        self.graph.reduce(from, to, amount);

        let note = note.map(str::trim).filter(|n| !n.is_empty());
        self.settlements.push(Settlement {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            note: note.map(str::to_string),
            timestamp: clock.now(),
        });
        self.log.push(LogEntry::new(
            TransactionKind::Settlement,
            format!(
                "Settlement: {} paid Rs. {} to {} ({})",
                from,
                amount,
                to,
                note.unwrap_or_default()
            ),
        ));
        info!(
            trip = %self.name,
            from,
            to,
            %amount,
            remaining = %(outstanding - amount),
            "settlement applied"
        );
        Ok(())
    }
}
