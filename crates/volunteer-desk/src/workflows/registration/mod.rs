//! Record resolution and stage transitions for the volunteer registration pipeline.
//!
//! A volunteer record lives in exactly one of three remote collections (new,
//! waiting, mailing); its stage is derived from which collection owns it. The
//! [`RecordResolver`] probes the collections in priority order to find a record,
//! the [`StageTransitionController`] exposes the one valid forward action per
//! stage, and the [`RegistrationDesk`] facade ties both to the listing views the
//! presentation layer renders.

pub mod domain;
pub mod resolver;
pub mod schedule;
pub mod service;
pub mod store;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use domain::{
    Collection, RegistrationBoard, ResolvedVolunteer, Stage, StageAction, VolunteerId,
    VolunteerRecord,
};
pub use resolver::{RecordResolver, ResolveError};
pub use schedule::{build_schedule, ScheduleRow};
pub use service::RegistrationDesk;
pub use store::{ActionError, CollectionStore, CompletionReport, TransportError};
pub use transitions::{
    AdvanceOutcome, RefreshSignal, StageTransitionController, TransitionError, TransitionOutcome,
};
