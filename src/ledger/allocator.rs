use crate::domain::{Expense, Money};
use crate::ledger::pool::Holdings;

/// Where a slice of a participant's share is paid from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Funding {
    /// The participant's own advance held by the payer.
    OwnAdvance,
    /// Another contributor's advance held by the payer.
    ContributorAdvance,
    /// The payer covers it out of pocket.
    Payer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub participant: String,
    pub source: String,
    pub amount: Money,
    pub funding: Funding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub share: Money,
    pub attributions: Vec<Attribution>,
    /// Post-allocation holdings of the payer, `None` when the payer held no advances.
    pub remaining: Option<Holdings>,
}

/// Decides how every participant's share of `expense` is funded.
///
/// The payer's own share is always self-paid. Every other participant first
/// draws on their own advance held by the payer, then on other contributors'
/// advances in descending order of what they held before this expense (ties
/// keep contributor order), and whatever is left is covered by the payer.
/// Participants are served in list order, so an early participant may drain a
/// contributor's advance before that contributor's own share comes up.
pub fn allocate(expense: &Expense, holdings: Option<&Holdings>) -> Allocation {
    let share = expense.share;
    let payer = expense.payer.as_str();

    let Some(holdings) = holdings else {
        let attributions = expense
            .participants
            .iter()
            .filter(|p| p.as_str() != payer)
            .filter(|_| share.is_positive())
            .map(|p| Attribution {
                participant: p.clone(),
                source: payer.to_string(),
                amount: share,
                funding: Funding::Payer,
            })
            .collect();

        return Allocation {
            share,
            attributions,
            remaining: None,
        };
    };

    let mut remaining = holdings.clone();
    let mut contributors: Vec<String> = holdings.keys().cloned().collect();
    // sort_by is stable, ties keep insertion order
    contributors.sort_by(|a, b| holdings[b].cmp(&holdings[a]));

    let mut attributions = Vec::new();

    for person in expense.participants.iter().filter(|p| p.as_str() != payer) {
        let mut outstanding = share;

        if let Some(own) = remaining.get_mut(person) {
            if own.is_positive() && outstanding.is_positive() {
                let used = outstanding.min(*own);
                *own -= used;
                outstanding -= used;
                attributions.push(Attribution {
                    participant: person.clone(),
                    source: person.clone(),
                    amount: used,
                    funding: Funding::OwnAdvance,
                });
            }
        }

        for contributor in &contributors {
            if contributor == person || !outstanding.is_positive() {
                continue;
            }
            let Some(available) = remaining.get_mut(contributor) else {
                continue;
            };
            if !available.is_positive() {
                continue;
            }
            let used = outstanding.min(*available);
            *available -= used;
            outstanding -= used;
            attributions.push(Attribution {
                participant: person.clone(),
                source: contributor.clone(),
                amount: used,
                funding: Funding::ContributorAdvance,
            });
        }

        if outstanding.is_positive() {
            attributions.push(Attribution {
                participant: person.clone(),
                source: payer.to_string(),
                amount: outstanding,
                funding: Funding::Payer,
            });
        }
    }

    Allocation {
        share,
        attributions,
        remaining: Some(remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(payer: &str, amount: i64, participants: &[&str]) -> Expense {
        Expense::new(payer, Money::from_units(amount), participants, "test")
    }

    fn holdings(entries: &[(&str, i64)]) -> Holdings {
        entries
            .iter()
            .map(|(name, amount)| (name.to_string(), Money::from_units(*amount)))
            .collect()
    }

    fn triples(allocation: &Allocation) -> Vec<(&str, &str, Money)> {
        allocation
            .attributions
            .iter()
            .map(|a| (a.participant.as_str(), a.source.as_str(), a.amount))
            .collect()
    }

    #[test]
    fn without_advances_payer_covers_everyone_else() {
        let allocation = allocate(&expense("Dave", 90, &["Dave", "Eve"]), None);

        assert_eq!(allocation.share, Money::from_units(45));
        assert_eq!(triples(&allocation), vec![("Eve", "Dave", Money::from_units(45))]);
        assert!(allocation.remaining.is_none());
    }

    #[test]
    fn own_advance_is_used_before_others() {
        let pool = holdings(&[("Alice", 300)]);
        let allocation = allocate(&expense("Bob", 150, &["Alice", "Bob", "Carol"]), Some(&pool));

        assert_eq!(
            triples(&allocation),
            vec![
                ("Alice", "Alice", Money::from_units(50)),
                ("Carol", "Alice", Money::from_units(50)),
            ]
        );
        let left = allocation.remaining.unwrap();
        assert_eq!(left["Alice"], Money::from_units(200));
    }

    #[test]
    fn contributors_are_drawn_largest_first_with_stable_ties() {
        let pool = holdings(&[("Ann", 10), ("Ben", 30), ("Cid", 30)]);
        let allocation = allocate(&expense("Tom", 100, &["Tom", "Zed"]), Some(&pool));

        assert_eq!(
            triples(&allocation),
            vec![
                ("Zed", "Ben", Money::from_units(30)),
                ("Zed", "Cid", Money::from_units(20)),
            ]
        );
        let left = allocation.remaining.unwrap();
        assert_eq!(left["Ann"], Money::from_units(10));
        assert_eq!(left["Ben"], Money::zero());
        assert_eq!(left["Cid"], Money::from_units(10));
    }

    #[test]
    fn uncovered_remainder_falls_to_payer() {
        let pool = holdings(&[("Ann", 10)]);
        let allocation = allocate(&expense("Tom", 60, &["Ann", "Zed", "Tom"]), Some(&pool));

        assert_eq!(
            triples(&allocation),
            vec![
                ("Ann", "Ann", Money::from_units(10)),
                ("Ann", "Tom", Money::from_units(10)),
                ("Zed", "Tom", Money::from_units(20)),
            ]
        );
        assert_eq!(allocation.remaining.unwrap()["Ann"], Money::zero());
    }

    #[test]
    fn earlier_participant_can_drain_a_later_contributor() {
        let pool = holdings(&[("Ann", 20)]);
        let allocation = allocate(&expense("Tom", 40, &["Zed", "Ann"]), Some(&pool));

        assert_eq!(
            triples(&allocation),
            vec![
                ("Zed", "Ann", Money::from_units(20)),
                ("Ann", "Tom", Money::from_units(20)),
            ]
        );
    }
}
