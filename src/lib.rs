//! Shared-trip bookkeeping: advances into a treasurer's pool, expenses funded
//! from those advances, pairwise obligations and their settlement.
//!
//! - [`ledger::Trip`] is the in-memory ledger of one trip.
//! - [`ledger::allocator`] decides which advances fund each share of an expense.
//! - [`ledger::Session`] keeps several isolated trips with one of them active.
//! - [`engine::Engine`] streams [`domain::Action`]s from an input into a session.

pub mod config;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod ledger;
pub mod output_repository;

pub use domain::{Error, Money};
pub use ledger::{Session, Trip};
