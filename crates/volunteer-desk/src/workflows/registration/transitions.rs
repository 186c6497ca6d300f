use std::sync::Arc;

use tracing::info;

use super::domain::{ResolvedVolunteer, Stage, VolunteerId};
use super::store::{ActionError, CollectionStore, CompletionReport};

/// Hook raised after every successful mutation so the listing views can refetch.
///
/// This replaces an implicit "reload" flag with an explicit seam: the controller
/// only signals, the presentation layer decides how to refresh.
pub trait RefreshSignal: Send + Sync {
    fn request_refresh(&self);
}

/// Exposes the one valid forward action per stage and signals completion.
///
/// Each action is a single remote mutating call. The controller never touches
/// the locally held snapshots; on failure no state changes and nothing is
/// retried.
pub struct StageTransitionController<S, N> {
    store: Arc<S>,
    refresh: Arc<N>,
}

impl<S, N> StageTransitionController<S, N>
where
    S: CollectionStore,
    N: RefreshSignal,
{
    pub fn new(store: Arc<S>, refresh: Arc<N>) -> Self {
        Self { store, refresh }
    }

    /// Move a record from new to waiting.
    pub async fn verify(&self, id: VolunteerId) -> Result<TransitionOutcome, TransitionError> {
        self.store.verify(id).await?;
        info!(%id, "record verified, moved to waiting list");
        self.refresh.request_refresh();
        Ok(TransitionOutcome {
            id,
            from: Stage::New,
            to: Stage::Waiting,
        })
    }

    /// Move a record from waiting to mailing.
    pub async fn approve(&self, id: VolunteerId) -> Result<TransitionOutcome, TransitionError> {
        self.store.approve(id).await?;
        info!(%id, "record approved, moved to mailing");
        self.refresh.request_refresh();
        Ok(TransitionOutcome {
            id,
            from: Stage::Waiting,
            to: Stage::Mailing,
        })
    }

    /// Move every mailing record to done in one remote call.
    ///
    /// The call is treated as atomic: success means the mailing collection
    /// emptied, failure means nothing is assumed locally.
    pub async fn complete_all(&self) -> Result<CompletionReport, TransitionError> {
        let report = self.store.complete_all().await?;
        info!(count = report.count(), "mailing collection completed");
        self.refresh.request_refresh();
        Ok(report)
    }

    /// Run the one forward action valid for the resolved record's stage.
    pub async fn advance(
        &self,
        resolved: &ResolvedVolunteer,
    ) -> Result<AdvanceOutcome, TransitionError> {
        match resolved.stage {
            Stage::New => Ok(AdvanceOutcome::Moved(self.verify(resolved.record.id).await?)),
            Stage::Waiting => Ok(AdvanceOutcome::Moved(
                self.approve(resolved.record.id).await?,
            )),
            Stage::Mailing => Ok(AdvanceOutcome::Completed(self.complete_all().await?)),
            Stage::Done => Err(TransitionError::Terminal),
        }
    }
}

/// A single record moved one stage forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub id: VolunteerId,
    pub from: Stage,
    pub to: Stage,
}

/// Result of [`StageTransitionController::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Moved(TransitionOutcome),
    Completed(CompletionReport),
}

#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("record is already fully registered")]
    Terminal,
    #[error(transparent)]
    Action(#[from] ActionError),
}
