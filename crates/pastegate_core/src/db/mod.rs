//! Record store for pastes: the [`PasteStore`] contract and its backends.

/// In-memory backend.
pub mod memory;
/// Paste table operations backed by redb.
pub mod paste;
/// redb table definitions.
pub mod tables;

use crate::error::AppError;
use crate::models::paste::Paste;
use std::path::Path;
use std::sync::Arc;

pub use memory::MemoryPasteStore;
pub use paste::PasteDb;

/// Result of a conditional view increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIncrement {
    /// The counter advanced; carries the updated row.
    Incremented(Paste),
    /// `current_views` had already reached `max_views`; nothing was written.
    LimitReached,
    /// No row for the id.
    Missing,
}

/// Keyed storage consumed by the access gate.
///
/// Implementations must make [`PasteStore::increment_views`] atomic with
/// respect to concurrent callers on the same id.
pub trait PasteStore: Send + Sync {
    /// Persist a new row. Fails without overwriting when the id exists.
    fn create(&self, paste: &Paste) -> Result<(), AppError>;

    /// Load a row by canonical id.
    fn get(&self, id: &str) -> Result<Option<Paste>, AppError>;

    /// Increment `current_views` only while it is below `max_views`.
    fn increment_views(&self, id: &str) -> Result<ViewIncrement, AppError>;

    /// Remove a row. Returns whether one existed.
    fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Number of stored rows, including expired and exhausted ones.
    fn count(&self) -> Result<usize, AppError>;
}

/// Database handle with access to the redb-backed paste table.
pub struct Database {
    pub pastes: PasteDb,
}

impl Database {
    /// Open (or create) the database under directory `path`.
    ///
    /// # Returns
    /// A fully initialized [`Database`].
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, another process
    /// holds the database file, or table initialization fails.
    pub fn new(path: &str) -> Result<Self, AppError> {
        std::fs::create_dir_all(path).map_err(|err| {
            AppError::StorageMessage(format!(
                "Failed to create database directory '{}': {}",
                path, err
            ))
        })?;

        let file = Path::new(path).join(tables::REDB_FILE_NAME);
        let db = match redb::Database::create(&file) {
            Ok(db) => db,
            Err(redb::DatabaseError::DatabaseAlreadyOpen) => {
                return Err(AppError::StorageMessage(format!(
                    "Database at '{}' is already open in another process.\n\
                    Stop the other Pastegate instance, or set DB_PATH to a different location.",
                    file.display()
                )));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            pastes: PasteDb::new(Arc::new(db))?,
        })
    }
}

impl PasteStore for Database {
    fn create(&self, paste: &Paste) -> Result<(), AppError> {
        self.pastes.create(paste)
    }

    fn get(&self, id: &str) -> Result<Option<Paste>, AppError> {
        self.pastes.get(id)
    }

    fn increment_views(&self, id: &str) -> Result<ViewIncrement, AppError> {
        self.pastes.increment_views(id)
    }

    fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.pastes.delete(id)
    }

    fn count(&self) -> Result<usize, AppError> {
        self.pastes.count()
    }
}

#[cfg(test)]
mod tests;
