//! Registry of running tables, keyed by table id.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::table::{TableHandle, TableOptions};

/// Many independent tables; each owns its own game and shares nothing.
#[derive(Clone, Default)]
pub struct TableRegistry {
    tables: Arc<DashMap<Uuid, TableHandle>>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a table and register it. The game is not started.
    pub fn create(&self, options: TableOptions) -> Result<TableHandle, AppError> {
        let handle = TableHandle::spawn(options)?;
        self.tables.insert(handle.id(), handle.clone());
        Ok(handle)
    }

    pub fn get(&self, id: Uuid) -> Result<TableHandle, AppError> {
        self.tables
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::table_not_found(id.to_string()))
    }

    /// Unregister and stop a table.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let (_, handle) = self
            .tables
            .remove(&id)
            .ok_or_else(|| AppError::table_not_found(id.to_string()))?;
        handle.shutdown().await;
        info!(table_id = %id, "table removed");
        Ok(())
    }

    /// Drop entries whose actor has already stopped.
    pub fn prune_closed(&self) -> usize {
        let before = self.tables.len();
        self.tables.retain(|_, handle| !handle.is_closed());
        before - self.tables.len()
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.tables.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub async fn shutdown_all(&self) {
        let handles: Vec<TableHandle> = self.tables.iter().map(|e| e.value().clone()).collect();
        self.tables.clear();
        for handle in handles {
            handle.shutdown().await;
        }
    }
}
