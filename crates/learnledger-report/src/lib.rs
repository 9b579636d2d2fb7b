//! learnledger-report — history exports for a single learner.
//!
//! Both formats render the same [`HistoryReport`]: the user's ledger rows,
//! their summary statistics and the progress gauge reading.

pub mod html;
pub mod json;

pub use json::HistoryReport;
