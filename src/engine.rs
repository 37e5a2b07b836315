use crate::domain::{
    Action, Error,
    traits::{ActionStream, DeadLetterQueue, OutputRepository},
};
use crate::ledger::Session;

use futures::StreamExt;

/// Drives a stream of actions through a session, one action at a time.
#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: ActionStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
    session: Session,
}

impl<I, O, D> Engine<I, O, D>
where
    I: ActionStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
            session: Session::new(),
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(action) = res.next().await {
            match action {
                Ok(action) => match self.apply_action(action) {
                    Ok(()) => {}
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_action(&mut self, action: Action) -> Result<(), Error> {
        tracing::trace!(%action, trip = self.session.active_name(), "applying action");

        match action {
            Action::OpenTrip { name } => self.session.open_trip(&name),
            Action::AddMember { name } => self.session.active_mut().add_member(&name),
            Action::Advance { from, to, amount } => {
                self.session.active_mut().record_advance(&from, &to, amount)
            }
            Action::Expense {
                payer,
                amount,
                participants,
                reason,
            } => {
                let participants: Vec<&str> = participants.iter().map(String::as_str).collect();
                self.session
                    .active_mut()
                    .record_expense(&payer, amount, &participants, &reason)
            }
            Action::Settle {
                from,
                to,
                amount,
                note,
            } => self
                .session
                .active_mut()
                .settle(&from, &to, amount, note.as_deref()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.output_repository.flush(&self.session)
    }
}
