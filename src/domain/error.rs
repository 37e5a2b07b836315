use crate::domain::Money;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Member {name} already exists")]
    DuplicateMember { name: String },

    #[error("Member {name} is not part of this trip")]
    UnknownMember { name: String },

    #[error("{member} cannot pay an advance to themselves")]
    SelfAdvance { member: String },

    #[error("Amount must be positive and at most {max}, got {amount}", max = Money::max_entry())]
    InvalidAmount { amount: Money },

    #[error("Expense needs at least one participant")]
    EmptyParticipants,

    #[error("{name} is listed more than once in the expense")]
    DuplicateParticipant { name: String },

    #[error("No pending dues from {from} to {to}")]
    NoObligation { from: String, to: String },

    #[error("{from} owes {to} only {outstanding}, cannot settle {amount}")]
    Overpayment {
        from: String,
        to: String,
        amount: Money,
        outstanding: Money,
    },

    #[error("Trip {name} already exists")]
    DuplicateTrip { name: String },

    #[error("Trip {name} does not exist")]
    UnknownTrip { name: String },
}
