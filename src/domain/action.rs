use crate::domain::Money;

/// A single user-level request against the session, as read from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenTrip {
        name: String,
    },
    AddMember {
        name: String,
    },
    Advance {
        from: String,
        to: String,
        amount: Money,
    },
    Expense {
        payer: String,
        amount: Money,
        participants: Vec<String>,
        reason: String,
    },
    Settle {
        from: String,
        to: String,
        amount: Money,
        note: Option<String>,
    },
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::OpenTrip { name } => write!(f, "trip,name={}", name),
            Action::AddMember { name } => write!(f, "member,name={}", name),
            Action::Advance { from, to, amount } => {
                write!(f, "advance,from={},to={},amount={}", from, to, amount)
            }
            Action::Expense {
                payer,
                amount,
                participants,
                ..
            } => write!(
                f,
                "expense,payer={},amount={},participants={}",
                payer,
                amount,
                participants.join(";")
            ),
            Action::Settle {
                from, to, amount, ..
            } => write!(f, "settle,from={},to={},amount={}", from, to, amount),
        }
    }
}
