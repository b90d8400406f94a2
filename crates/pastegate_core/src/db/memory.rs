//! Process-local paste store for tests and ephemeral servers.

use super::{PasteStore, ViewIncrement};
use crate::{error::AppError, models::paste::Paste};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Paste rows held in a mutex-guarded map. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryPasteStore {
    rows: Mutex<HashMap<String, Paste>>,
}

impl MemoryPasteStore {
    fn rows(&self) -> Result<MutexGuard<'_, HashMap<String, Paste>>, AppError> {
        self.rows
            .lock()
            .map_err(|_| AppError::StorageMessage("Memory paste store lock poisoned".to_string()))
    }
}

impl PasteStore for MemoryPasteStore {
    fn create(&self, paste: &Paste) -> Result<(), AppError> {
        let mut rows = self.rows()?;
        if rows.contains_key(&paste.id) {
            return Err(AppError::StorageMessage(format!(
                "Paste id '{}' already exists",
                paste.id
            )));
        }
        rows.insert(paste.id.clone(), paste.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Paste>, AppError> {
        Ok(self.rows()?.get(id).cloned())
    }

    fn increment_views(&self, id: &str) -> Result<ViewIncrement, AppError> {
        let mut rows = self.rows()?;
        let Some(paste) = rows.get_mut(id) else {
            return Ok(ViewIncrement::Missing);
        };
        if paste.views_exhausted() {
            return Ok(ViewIncrement::LimitReached);
        }
        paste.current_views = paste.current_views.saturating_add(1);
        Ok(ViewIncrement::Incremented(paste.clone()))
    }

    fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.rows()?.remove(id).is_some())
    }

    fn count(&self) -> Result<usize, AppError> {
        Ok(self.rows()?.len())
    }
}
