use chrono::NaiveDateTime;
use futures::Stream;

use crate::domain::{Action, Error};
use crate::ledger::Session;

pub trait ActionStream {
    type Actions: Stream<Item = Result<Action, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::Actions;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait OutputRepository {
    fn flush(&mut self, session: &Session) -> Result<(), Error>;
}

/// Source of settlement timestamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
