//! Append-only storage for scored weeks.
//!
//! The [`Ledger`] trait is the seam between the scoring engine and the
//! backing store. [`CsvLedger`] is the on-disk table; [`MemoryLedger`]
//! keeps rows in memory.

mod csv_file;
mod memory;

pub use csv_file::CsvLedger;
pub use memory::MemoryLedger;

use crate::error::PersistenceError;
use crate::model::LedgerEntry;

/// Durable, append-only table of ledger entries in arrival order.
pub trait Ledger {
    /// Append one entry. Existing rows are never touched.
    fn append(&mut self, entry: LedgerEntry) -> Result<(), PersistenceError>;

    /// Every entry, in arrival order.
    fn entries(&self) -> Result<Vec<LedgerEntry>, PersistenceError>;

    /// Entries for one user, in arrival order. Empty if the user has none.
    fn query_by_user(&self, user: &str) -> Result<Vec<LedgerEntry>, PersistenceError> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|e| e.user == user)
            .collect())
    }
}
