use std::sync::Arc;

use super::domain::{Collection, RegistrationBoard, ResolvedVolunteer, VolunteerId};
use super::resolver::{RecordResolver, ResolveError};
use super::schedule::{build_schedule, ScheduleRow};
use super::store::{CollectionStore, CompletionReport, TransportError};
use super::transitions::{
    AdvanceOutcome, RefreshSignal, StageTransitionController, TransitionError, TransitionOutcome,
};

/// Facade composing the listing loader, record resolver, and stage transition
/// controller behind one surface for presentation callers.
pub struct RegistrationDesk<S, N> {
    store: Arc<S>,
    resolver: RecordResolver<S>,
    controller: StageTransitionController<S, N>,
}

impl<S, N> RegistrationDesk<S, N>
where
    S: CollectionStore,
    N: RefreshSignal,
{
    pub fn new(store: Arc<S>, refresh: Arc<N>) -> Self {
        let resolver = RecordResolver::new(store.clone());
        let controller = StageTransitionController::new(store.clone(), refresh);
        Self {
            store,
            resolver,
            controller,
        }
    }

    /// Load the three listed collections. The fetches run concurrently purely
    /// to cut latency; they share no state. Any failed fetch fails the board.
    pub async fn board(&self) -> Result<RegistrationBoard, TransportError> {
        let (new, waiting, mailing) = tokio::join!(
            self.store.list(Collection::New),
            self.store.list(Collection::Waiting),
            self.store.list(Collection::Mailing),
        );

        Ok(RegistrationBoard {
            new: new?,
            waiting: waiting?,
            mailing: mailing?,
        })
    }

    pub async fn resolve(&self, id: VolunteerId) -> Result<ResolvedVolunteer, ResolveError> {
        self.resolver.resolve(id).await
    }

    pub async fn verify(&self, id: VolunteerId) -> Result<TransitionOutcome, TransitionError> {
        self.controller.verify(id).await
    }

    pub async fn approve(&self, id: VolunteerId) -> Result<TransitionOutcome, TransitionError> {
        self.controller.approve(id).await
    }

    pub async fn complete_all(&self) -> Result<CompletionReport, TransitionError> {
        self.controller.complete_all().await
    }

    pub async fn advance(
        &self,
        resolved: &ResolvedVolunteer,
    ) -> Result<AdvanceOutcome, TransitionError> {
        self.controller.advance(resolved).await
    }

    /// Interview schedule for the current waiting list.
    pub async fn schedule(&self) -> Result<Vec<ScheduleRow>, TransportError> {
        let waiting = self.store.list(Collection::Waiting).await?;
        Ok(build_schedule(&waiting))
    }
}
