use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::ActionStream;
use crate::domain::{Action, Error, Money};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    amount: Option<Money>,
    #[serde(default)]
    participants: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

fn required(value: Option<String>, column: &str, kind: &str) -> Result<String, Error> {
    value.ok_or_else(|| Error::Ingestion(format!("{} row is missing `{}`", kind, column)))
}

impl TryFrom<CsvRow> for Action {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let kind = row.kind.trim().to_ascii_lowercase();

        let action = match (kind.as_str(), row.amount) {
            ("trip", None) => Action::OpenTrip {
                name: required(row.from, "from", &kind)?,
            },
            ("member", None) => Action::AddMember {
                name: required(row.from, "from", &kind)?,
            },
            ("advance", Some(amount)) => Action::Advance {
                from: required(row.from, "from", &kind)?,
                to: required(row.to, "to", &kind)?,
                amount,
            },
            ("expense", Some(amount)) => Action::Expense {
                payer: required(row.from, "from", &kind)?,
                amount,
                participants: row
                    .participants
                    .unwrap_or_default()
                    .split(';')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect(),
                reason: row.note.unwrap_or_default(),
            },
            // a short settle row carries its note in the participants column
            ("settle", Some(amount)) => Action::Settle {
                from: required(row.from, "from", &kind)?,
                to: required(row.to, "to", &kind)?,
                amount,
                note: row.note.or(row.participants),
            },
            (known @ ("trip" | "member" | "advance" | "expense" | "settle"), amount) => {
                return Err(Error::Ingestion(format!(
                    "{} row {} an amount",
                    known,
                    if amount.is_some() { "does not take" } else { "is missing" }
                )));
            }
            (other, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid action type: {}",
                    other
                )));
            }
        };

        Ok(action)
    }
}

impl<R: Read + Send + 'static> ActionStream for CsvReader<R> {
    type Actions = Pin<Box<dyn Stream<Item = Result<Action, Error>> + Send>>;

    fn stream(&mut self) -> Self::Actions {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // already consumed
                return Box::pin(stream::iter(Vec::<Result<Action, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Action::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;

    async fn collect(input: &'static str) -> Vec<Result<Action, Error>> {
        let mut reader = CsvReader::new(input.as_bytes()).unwrap();
        reader.stream().collect().await
    }

    #[tokio::test]
    async fn parses_every_action_kind() {
        let actions = collect(
            "type, from, to, amount, participants, note\n\
             trip, Goa\n\
             member, Alice\n\
             advance, Alice, Bob, 300\n\
             expense, Bob, , 150, Alice; Bob ;Carol, dinner\n\
             settle, Carol, Alice, 50, cash\n",
        )
        .await;

        let actions: Vec<Action> = actions.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            actions,
            vec![
                Action::OpenTrip { name: "Goa".into() },
                Action::AddMember { name: "Alice".into() },
                Action::Advance {
                    from: "Alice".into(),
                    to: "Bob".into(),
                    amount: Money::from_units(300),
                },
                Action::Expense {
                    payer: "Bob".into(),
                    amount: Money::from_units(150),
                    participants: vec!["Alice".into(), "Bob".into(), "Carol".into()],
                    reason: "dinner".into(),
                },
                Action::Settle {
                    from: "Carol".into(),
                    to: "Alice".into(),
                    amount: Money::from_units(50),
                    note: Some("cash".into()),
                },
            ]
        );
    }

    #[tokio::test]
    async fn malformed_rows_become_errors_and_stream_continues() {
        let actions = collect(
            "type, from, to, amount, participants, note\n\
             refund, Alice, Bob, 10\n\
             advance, Alice, , 10\n\
             advance, Alice, Bob, ten\n\
             member, Bob\n",
        )
        .await;

        assert_eq!(actions.len(), 4);
        assert!(matches!(actions[0], Err(Error::Ingestion(_))));
        assert!(matches!(actions[1], Err(Error::Ingestion(_))));
        assert!(matches!(actions[2], Err(Error::Ingestion(_))));
        assert!(matches!(&actions[3], Ok(Action::AddMember { name }) if name == "Bob"));
    }

    #[tokio::test]
    async fn settle_note_is_read_from_either_layout() {
        let actions = collect(
            "type, from, to, amount, participants, note\n\
             settle, Eve, Dave, 45, lunch\n\
             settle, Eve, Dave, 20, , taxi\n\
             settle, Eve, Dave, 5\n",
        )
        .await;

        let notes: Vec<Option<String>> = actions
            .into_iter()
            .map(|action| match action {
                Ok(Action::Settle { note, .. }) => note,
                other => panic!("expected a settle action, got {:?}", other),
            })
            .collect();
        assert_eq!(
            notes,
            vec![Some("lunch".to_string()), Some("taxi".to_string()), None]
        );
    }

    #[tokio::test]
    async fn amount_on_member_row_is_rejected() {
        let actions = collect("type, from, to, amount\nmember, Bob, , 5\n").await;
        assert!(matches!(&actions[0], Err(Error::Ingestion(msg)) if msg.contains("does not take")));
    }
}
