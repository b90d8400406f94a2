//! Paste storage operations backed by redb.

use super::tables::PASTES;
use super::ViewIncrement;
use crate::{error::AppError, models::paste::Paste};
use redb::{ReadableDatabase, ReadableTable};
use std::sync::Arc;

/// Accessor for the `pastes` redb table.
pub struct PasteDb {
    db: Arc<redb::Database>,
}

fn deserialize_paste(bytes: &[u8]) -> Result<Paste, AppError> {
    Ok(bincode::deserialize(bytes)?)
}

impl PasteDb {
    /// Initialize the paste table if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(PASTES)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Insert a new paste row.
    ///
    /// # Errors
    /// Returns an error when serialization fails, the id already exists, or
    /// storage operations fail.
    pub fn create(&self, paste: &Paste) -> Result<(), AppError> {
        let encoded = bincode::serialize(paste)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut pastes = write_txn.open_table(PASTES)?;
            if pastes.get(paste.id.as_str())?.is_some() {
                return Err(AppError::StorageMessage(format!(
                    "Paste id '{}' already exists",
                    paste.id
                )));
            }
            pastes.insert(paste.id.as_str(), encoded.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Fetch a paste by id.
    ///
    /// # Returns
    /// `Ok(Some(paste))` when found, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn get(&self, id: &str) -> Result<Option<Paste>, AppError> {
        let read_txn = self.db.begin_read()?;
        let pastes = read_txn.open_table(PASTES)?;
        let row = pastes.get(id)?;
        row.map(|value| deserialize_paste(value.value())).transpose()
    }

    /// Advance the view counter unless the limit is already reached.
    ///
    /// The read, limit check, and write share one write transaction. redb
    /// admits a single writer at a time, so concurrent callers are serialized
    /// and at most `max_views` increments ever commit.
    ///
    /// # Errors
    /// Returns an error when storage access or (de)serialization fails.
    pub fn increment_views(&self, id: &str) -> Result<ViewIncrement, AppError> {
        let write_txn = self.db.begin_write()?;
        let updated = {
            let mut pastes = write_txn.open_table(PASTES)?;
            let Some(guard) = pastes.get(id)? else {
                return Ok(ViewIncrement::Missing);
            };
            let mut paste = deserialize_paste(guard.value())?;
            drop(guard);

            if paste.views_exhausted() {
                return Ok(ViewIncrement::LimitReached);
            }
            paste.current_views = paste.current_views.saturating_add(1);

            let encoded = bincode::serialize(&paste)?;
            pastes.insert(id, encoded.as_slice())?;
            paste
        };
        write_txn.commit()?;
        Ok(ViewIncrement::Incremented(updated))
    }

    /// Delete a paste by id regardless of its expiry or view state.
    ///
    /// # Returns
    /// `true` if a row was removed.
    ///
    /// # Errors
    /// Returns an error if deletion fails.
    pub fn delete(&self, id: &str) -> Result<bool, AppError> {
        let write_txn = self.db.begin_write()?;
        let mut pastes = write_txn.open_table(PASTES)?;
        let removed = pastes.remove(id)?.is_some();
        drop(pastes);
        write_txn.commit()?;
        Ok(removed)
    }

    /// Count stored rows.
    ///
    /// # Errors
    /// Returns an error when storage iteration fails.
    pub fn count(&self) -> Result<usize, AppError> {
        let read_txn = self.db.begin_read()?;
        let pastes = read_txn.open_table(PASTES)?;
        let mut count = 0;
        for item in pastes.iter()? {
            item?;
            count += 1;
        }
        Ok(count)
    }
}
