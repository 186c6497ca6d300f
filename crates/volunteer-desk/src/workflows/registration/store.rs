use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::domain::{Collection, VolunteerId, VolunteerRecord};

/// Abstraction over the externally owned collection API so the workflow can be
/// exercised against in-memory fakes.
///
/// `fetch` keeps absence and transport failure apart: `Ok(None)` means the
/// collection definitively does not hold the record, `Err` means the probe
/// could not determine anything. The resolver depends on that distinction.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn list(&self, collection: Collection) -> Result<Vec<VolunteerRecord>, TransportError>;

    async fn fetch(
        &self,
        collection: Collection,
        id: VolunteerId,
    ) -> Result<Option<VolunteerRecord>, TransportError>;

    /// Move a record from the new collection to the waiting list.
    async fn verify(&self, id: VolunteerId) -> Result<(), ActionError>;

    /// Move a record from the waiting list to the mailing collection.
    async fn approve(&self, id: VolunteerId) -> Result<(), ActionError>;

    /// Move every mailing record to done, ending registration for all of them.
    async fn complete_all(&self) -> Result<CompletionReport, ActionError>;
}

/// A remote call that did not succeed (network or server error).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure of a mutating call. Nothing is retried and no local state changes.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("record not found in the expected collection")]
    NotFound,
    #[error("action rejected: {0}")]
    Rejected(String),
    #[error("a bulk completion is already running")]
    Busy,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result of a successful bulk completion: the names that were processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub completed: Vec<String>,
}

impl CompletionReport {
    pub fn count(&self) -> usize {
        self.completed.len()
    }
}
