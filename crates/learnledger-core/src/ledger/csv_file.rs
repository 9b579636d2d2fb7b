//! CSV-backed ledger file.
//!
//! Every append reads the whole table, validates it, adds the new row and
//! rewrites the file, so an append costs O(rows in the ledger). There is no
//! file locking: only one process may use a ledger file at a time.

use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::ledger::Ledger;
use crate::model::{LedgerEntry, LEDGER_COLUMNS};

/// Ledger stored as a CSV table with the seven ledger columns.
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    /// Open the ledger at `path`, creating it with just the header row if it
    /// does not exist yet. An existing file is not read until first use.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let ledger = Self { path: path.into() };
        if !ledger.path.exists() {
            ledger.write_all(&[])?;
            tracing::info!(path = %ledger.path.display(), "created empty ledger");
        }
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<LedgerEntry>, PersistenceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| PersistenceError::from_csv(&self.path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| PersistenceError::from_csv(&self.path, e))?
            .clone();
        check_header(&self.path, &headers)?;

        reader
            .deserialize::<LedgerEntry>()
            .map(|row| row.map_err(|e| PersistenceError::from_csv(&self.path, e)))
            .collect()
    }

    /// Replace the file contents with `entries`. The table is written to a
    /// temporary file next to the ledger and renamed over it, so a failed
    /// write leaves the previous contents in place.
    fn write_all(&self, entries: &[LedgerEntry]) -> Result<(), PersistenceError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| PersistenceError::io(&dir, e))?;

        let tmp = tempfile::NamedTempFile::new_in(&dir)
            .map_err(|e| PersistenceError::io(&self.path, e))?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file());
            writer
                .write_record(LEDGER_COLUMNS)
                .map_err(|e| PersistenceError::from_csv(&self.path, e))?;
            for entry in entries {
                writer
                    .serialize(entry)
                    .map_err(|e| PersistenceError::from_csv(&self.path, e))?;
            }
            writer
                .flush()
                .map_err(|e| PersistenceError::io(&self.path, e))?;
        }

        tmp.persist(&self.path)
            .map_err(|e| PersistenceError::io(&self.path, e.error))?;
        Ok(())
    }
}

fn check_header(path: &Path, headers: &csv::StringRecord) -> Result<(), PersistenceError> {
    let matches = headers.len() == LEDGER_COLUMNS.len()
        && headers.iter().zip(LEDGER_COLUMNS).all(|(h, c)| h == c);
    if matches {
        return Ok(());
    }
    Err(PersistenceError::SchemaMismatch {
        path: path.to_path_buf(),
        expected: LEDGER_COLUMNS.join(", "),
        found: headers.iter().collect::<Vec<_>>().join(", "),
    })
}

impl Ledger for CsvLedger {
    fn append(&mut self, entry: LedgerEntry) -> Result<(), PersistenceError> {
        let mut entries = self.read_all()?;
        let (user, week) = (entry.user.clone(), entry.week);
        entries.push(entry);
        self.write_all(&entries)?;
        tracing::info!(
            user = %user,
            week,
            rows = entries.len(),
            "appended ledger entry"
        );
        Ok(())
    }

    fn entries(&self) -> Result<Vec<LedgerEntry>, PersistenceError> {
        self.read_all()
    }
}
