pub mod action;
pub mod error;
pub mod expense;
pub mod member;
pub mod money;
pub mod settlement;
pub mod traits;
pub mod transaction;

pub use action::Action;
pub use error::Error;
pub use expense::Expense;
pub use member::MemberSummary;
pub use money::Money;
pub use settlement::Settlement;
pub use traits::{ActionStream, Clock, DeadLetterQueue, OutputRepository, SystemClock};
pub use transaction::{LogEntry, TransactionKind};
