use std::sync::Arc;

use super::common::{volunteer, CountingRefresh, MemoryCollections};
use crate::workflows::registration::{
    ActionError, AdvanceOutcome, Collection, ResolvedVolunteer, Stage, StageTransitionController,
    TransitionError, VolunteerId,
};

fn controller(
    store: Arc<MemoryCollections>,
) -> (
    Arc<CountingRefresh>,
    StageTransitionController<MemoryCollections, CountingRefresh>,
) {
    let refresh = Arc::new(CountingRefresh::default());
    let controller = StageTransitionController::new(store, refresh.clone());
    (refresh, controller)
}

#[tokio::test]
async fn verify_moves_record_and_raises_refresh() {
    let store = Arc::new(MemoryCollections::default());
    store.seed(Collection::New, volunteer(1, "Alina"));
    let (refresh, controller) = controller(store.clone());

    let outcome = controller.verify(VolunteerId(1)).await.expect("verifies");
    assert_eq!(outcome.from, Stage::New);
    assert_eq!(outcome.to, Stage::Waiting);
    assert_eq!(store.len(Collection::New), 0);
    assert_eq!(store.len(Collection::Waiting), 1);
    assert_eq!(refresh.count(), 1);
}

#[tokio::test]
async fn approve_moves_record_and_raises_refresh() {
    let store = Arc::new(MemoryCollections::default());
    store.seed(Collection::Waiting, volunteer(2, "Boris"));
    let (refresh, controller) = controller(store.clone());

    let outcome = controller.approve(VolunteerId(2)).await.expect("approves");
    assert_eq!(outcome.to, Stage::Mailing);
    assert_eq!(store.len(Collection::Waiting), 0);
    assert_eq!(store.len(Collection::Mailing), 1);
    assert_eq!(refresh.count(), 1);
}

#[tokio::test]
async fn complete_all_empties_mailing_and_reports_names() {
    let store = Arc::new(MemoryCollections::default());
    store.seed(Collection::Mailing, volunteer(3, "Vera"));
    store.seed(Collection::Mailing, volunteer(5, "Gleb"));
    let (refresh, controller) = controller(store.clone());

    let report = controller.complete_all().await.expect("completes");
    assert_eq!(report.count(), 2);
    assert_eq!(store.len(Collection::Mailing), 0);
    assert_eq!(store.completed_names(), vec!["Vera", "Gleb"]);
    assert_eq!(refresh.count(), 1);
}

#[tokio::test]
async fn failed_action_raises_no_refresh() {
    let store = Arc::new(MemoryCollections::default());
    let (refresh, controller) = controller(store);

    match controller.verify(VolunteerId(404)).await {
        Err(TransitionError::Action(ActionError::NotFound)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(refresh.count(), 0);
}

#[tokio::test]
async fn verify_on_already_advanced_record_is_rejected() {
    let store = Arc::new(MemoryCollections::default());
    store.seed(Collection::Waiting, volunteer(7, "Dana"));
    let (_, controller) = controller(store);

    match controller.verify(VolunteerId(7)).await {
        Err(TransitionError::Action(ActionError::Rejected(reason))) => {
            assert!(reason.contains("already verified"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_bulk_completion_surfaces_busy() {
    let store = Arc::new(MemoryCollections::default());
    store.seed(Collection::Mailing, volunteer(8, "Egor"));
    store.set_busy(true);
    let (refresh, controller) = controller(store.clone());

    match controller.complete_all().await {
        Err(TransitionError::Action(ActionError::Busy)) => {}
        other => panic!("expected Busy, got {other:?}"),
    }
    assert_eq!(store.len(Collection::Mailing), 1);
    assert_eq!(refresh.count(), 0);
}

#[tokio::test]
async fn advance_dispatches_per_stage() {
    let store = Arc::new(MemoryCollections::default());
    store.seed(Collection::New, volunteer(10, "Inga"));
    let (_, controller) = controller(store.clone());

    let resolved = ResolvedVolunteer {
        record: volunteer(10, "Inga"),
        stage: Stage::New,
    };
    match controller.advance(&resolved).await.expect("advances") {
        AdvanceOutcome::Moved(outcome) => assert_eq!(outcome.to, Stage::Waiting),
        other => panic!("expected Moved, got {other:?}"),
    }

    let resolved = ResolvedVolunteer {
        record: volunteer(10, "Inga"),
        stage: Stage::Done,
    };
    match controller.advance(&resolved).await {
        Err(TransitionError::Terminal) => {}
        other => panic!("expected Terminal, got {other:?}"),
    }
}
