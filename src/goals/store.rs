//! In-memory goal store.
//!
//! Holds committed goals in two ordered lists, pending and completed.
//! Each id lives in exactly one list and every record's status matches
//! the list holding it.

use uuid::Uuid;

use super::types::{GoalRecord, GoalStatus};
use super::wizard::WizardHost;

/// Pending and completed goals in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GoalStore {
    pending: Vec<GoalRecord>,
    completed: Vec<GoalRecord>,
}

impl GoalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record to the pending list.
    pub fn add_pending(&mut self, record: GoalRecord) -> Result<(), StoreError> {
        let id = record.id();
        if self.contains(id) {
            return Err(StoreError::Conflict(id));
        }
        if record.status() != GoalStatus::Pending {
            return Err(StoreError::NotPending(id));
        }

        self.pending.push(record);
        Ok(())
    }

    /// Move a pending record to the end of the completed list.
    pub fn complete(&mut self, id: Uuid) -> Result<&GoalRecord, StoreError> {
        let index = self
            .pending
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut record = self.pending.remove(index);
        record.mark_completed();
        tracing::info!("Completed goal {} ({})", id, record.title());
        self.completed.push(record);

        Ok(&self.completed[self.completed.len() - 1])
    }

    /// Delete a record from whichever list holds it.
    pub fn remove(&mut self, id: Uuid) -> Result<GoalRecord, StoreError> {
        if let Some(index) = self.pending.iter().position(|r| r.id() == id) {
            return Ok(self.pending.remove(index));
        }
        if let Some(index) = self.completed.iter().position(|r| r.id() == id) {
            return Ok(self.completed.remove(index));
        }
        Err(StoreError::NotFound(id))
    }

    /// Get a record by ID from either list.
    pub fn get(&self, id: Uuid) -> Option<&GoalRecord> {
        self.pending
            .iter()
            .chain(self.completed.iter())
            .find(|r| r.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Pending goals, oldest first.
    pub fn pending(&self) -> &[GoalRecord] {
        &self.pending
    }

    /// Completed goals in completion order.
    pub fn completed(&self) -> &[GoalRecord] {
        &self.completed
    }

    /// Total number of goals.
    pub fn len(&self) -> usize {
        self.pending.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }
}

impl WizardHost for GoalStore {
    fn on_commit(&mut self, record: GoalRecord) {
        if let Err(e) = self.add_pending(record) {
            tracing::warn!("Dropped committed goal: {}", e);
        }
    }
}

/// Goal store errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Goal already exists: {0}")]
    Conflict(Uuid),

    #[error("Goal not found: {0}")]
    NotFound(Uuid),

    #[error("Goal is not pending: {0}")]
    NotPending(Uuid),
}
