use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::{Error, Money, OutputRepository};
use crate::ledger::{MemberSummaryView, Session, Status, TripExport};

/// Flat CSV shape of a member summary; the obligation rows are left to JSON.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    trip: &'a str,
    name: &'a str,
    advance_given: Money,
    advance_received: Money,
    advance_used_by_others: Money,
    advance_used_from_others: Money,
    advance_balance: Money,
    own_paid: Money,
    share: Money,
    gets_back: Money,
    owes: Money,
    net: Money,
    status: Status,
}

impl<'a> SummaryRow<'a> {
    fn new(trip: &'a str, view: &'a MemberSummaryView) -> Self {
        Self {
            trip,
            name: &view.name,
            advance_given: view.counters.advance_given,
            advance_received: view.counters.advance_received,
            advance_used_by_others: view.counters.advance_used_by_others,
            advance_used_from_others: view.counters.advance_used_from_others,
            advance_balance: view.counters.advance_balance,
            own_paid: view.counters.own_paid,
            share: view.counters.share,
            gets_back: view.gets_back,
            owes: view.owes,
            net: view.net,
            status: view.status,
        }
    }
}

/// Writes one summary row per member of every trip.
#[derive(Debug)]
pub struct CsvSummaryOutput<W: Write> {
    writer: W,
}

impl<W: Write> CsvSummaryOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputRepository for CsvSummaryOutput<W> {
    fn flush(&mut self, session: &Session) -> Result<(), Error> {
        let mut wtr = csv::Writer::from_writer(&mut self.writer);
        for trip in session.trips() {
            let views = trip.all_summaries();
            for view in &views {
                wtr.serialize(SummaryRow::new(trip.name(), view))?;
            }
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Writes the full serialization view of every trip as pretty JSON.
#[derive(Debug)]
pub struct JsonExportOutput<W: Write> {
    writer: W,
}

impl<W: Write> JsonExportOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputRepository for JsonExportOutput<W> {
    fn flush(&mut self, session: &Session) -> Result<(), Error> {
        let exports: IndexMap<&str, TripExport> = session
            .trips()
            .map(|trip| (trip.name(), trip.export()))
            .collect();
        serde_json::to_writer_pretty(&mut self.writer, &exports)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
