//! In-memory ledger.

use crate::error::PersistenceError;
use crate::ledger::Ledger;
use crate::model::LedgerEntry;

/// Ledger that keeps every entry in a `Vec`. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    entries: Vec<LedgerEntry>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows, in arrival order.
    pub fn with_entries(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn append(&mut self, entry: LedgerEntry) -> Result<(), PersistenceError> {
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<LedgerEntry>, PersistenceError> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user: &str, week: u32) -> LedgerEntry {
        LedgerEntry {
            user: user.into(),
            week,
            learning_points: 1,
            bonus: 1,
            application_points: 1,
            certificate_points: 1,
            total_eval_points: 3,
        }
    }

    #[test]
    fn query_filters_by_user_in_arrival_order() {
        let mut ledger = MemoryLedger::new();
        ledger.append(entry("alice", 2)).unwrap();
        ledger.append(entry("bob", 1)).unwrap();
        ledger.append(entry("alice", 1)).unwrap();

        let weeks: Vec<u32> = ledger
            .query_by_user("alice")
            .unwrap()
            .iter()
            .map(|e| e.week)
            .collect();
        assert_eq!(weeks, vec![2, 1]);
        assert!(ledger.query_by_user("carol").unwrap().is_empty());
    }
}
