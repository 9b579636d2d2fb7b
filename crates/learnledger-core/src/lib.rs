//! learnledger-core — weekly scoring, momentum bonus and the progress ledger.
//!
//! This crate holds every rule of the system: the point formulas, the
//! per-user bonus state, the append-only ledger and the replay that rebuilds
//! state from it on start-up. Shells (the CLI, report generators) only call
//! into [`engine::Scorekeeper`].

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod ledger;
pub mod model;
pub mod rebuild;
pub mod scoring;
pub mod statistics;
pub mod tracker;

pub use engine::{Scorekeeper, SubmitOutcome};
pub use error::{PersistenceError, SubmitError, ValidationError};
pub use input::Submission;
pub use ledger::{CsvLedger, Ledger, MemoryLedger};
pub use model::{LedgerEntry, Points, ProgressSnapshot, UserState};
pub use scoring::{PerformanceTier, WeeklyScore};
