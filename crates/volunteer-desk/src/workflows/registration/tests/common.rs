use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::workflows::registration::{
    ActionError, Collection, CollectionStore, CompletionReport, RefreshSignal, RegistrationDesk,
    TransportError, VolunteerId, VolunteerRecord,
};

pub(super) fn volunteer(id: u64, name: &str) -> VolunteerRecord {
    VolunteerRecord {
        id: VolunteerId(id),
        name: name.to_string(),
        phone_number: format!("+7 900 000-{id:04}"),
        telegram_username: format!("{}_{id}", name.to_ascii_lowercase().replace(' ', "_")),
        telegram_id: Some(id as i64),
        image_url: None,
    }
}

/// In-memory stand-in for the external collection API. Collections can be
/// marked as failing to simulate transport errors, and the bulk-completion
/// lock can be held to simulate a concurrent run.
#[derive(Default)]
pub(super) struct MemoryCollections {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    new: BTreeMap<u64, VolunteerRecord>,
    waiting: BTreeMap<u64, VolunteerRecord>,
    mailing: BTreeMap<u64, VolunteerRecord>,
    done: Vec<String>,
    failing: HashSet<Collection>,
    busy: bool,
}

impl Inner {
    fn map(&self, collection: Collection) -> &BTreeMap<u64, VolunteerRecord> {
        match collection {
            Collection::New => &self.new,
            Collection::Waiting => &self.waiting,
            Collection::Mailing => &self.mailing,
        }
    }

    fn map_mut(&mut self, collection: Collection) -> &mut BTreeMap<u64, VolunteerRecord> {
        match collection {
            Collection::New => &mut self.new,
            Collection::Waiting => &mut self.waiting,
            Collection::Mailing => &mut self.mailing,
        }
    }
}

impl MemoryCollections {
    pub(super) fn seed(&self, collection: Collection, record: VolunteerRecord) {
        let mut inner = self.inner.lock().expect("collections mutex poisoned");
        inner.map_mut(collection).insert(record.id.0, record);
    }

    pub(super) fn fail(&self, collection: Collection) {
        let mut inner = self.inner.lock().expect("collections mutex poisoned");
        inner.failing.insert(collection);
    }

    pub(super) fn set_busy(&self, busy: bool) {
        let mut inner = self.inner.lock().expect("collections mutex poisoned");
        inner.busy = busy;
    }

    pub(super) fn len(&self, collection: Collection) -> usize {
        let inner = self.inner.lock().expect("collections mutex poisoned");
        inner.map(collection).len()
    }

    pub(super) fn completed_names(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("collections mutex poisoned");
        inner.done.clone()
    }
}

#[async_trait]
impl CollectionStore for MemoryCollections {
    async fn list(&self, collection: Collection) -> Result<Vec<VolunteerRecord>, TransportError> {
        let inner = self.inner.lock().expect("collections mutex poisoned");
        if inner.failing.contains(&collection) {
            return Err(TransportError::new(format!(
                "collection '{collection}' unavailable"
            )));
        }
        Ok(inner.map(collection).values().cloned().collect())
    }

    async fn fetch(
        &self,
        collection: Collection,
        id: VolunteerId,
    ) -> Result<Option<VolunteerRecord>, TransportError> {
        let inner = self.inner.lock().expect("collections mutex poisoned");
        if inner.failing.contains(&collection) {
            return Err(TransportError::new(format!(
                "collection '{collection}' unavailable"
            )));
        }
        Ok(inner.map(collection).get(&id.0).cloned())
    }

    async fn verify(&self, id: VolunteerId) -> Result<(), ActionError> {
        let mut inner = self.inner.lock().expect("collections mutex poisoned");
        match inner.new.remove(&id.0) {
            Some(record) => {
                inner.waiting.insert(id.0, record);
                Ok(())
            }
            None if inner.waiting.contains_key(&id.0) || inner.mailing.contains_key(&id.0) => {
                Err(ActionError::Rejected("application already verified".to_string()))
            }
            None => Err(ActionError::NotFound),
        }
    }

    async fn approve(&self, id: VolunteerId) -> Result<(), ActionError> {
        let mut inner = self.inner.lock().expect("collections mutex poisoned");
        match inner.waiting.remove(&id.0) {
            Some(record) => {
                inner.mailing.insert(id.0, record);
                Ok(())
            }
            None if inner.mailing.contains_key(&id.0) => {
                Err(ActionError::Rejected("application already approved".to_string()))
            }
            None => Err(ActionError::NotFound),
        }
    }

    async fn complete_all(&self) -> Result<CompletionReport, ActionError> {
        let mut inner = self.inner.lock().expect("collections mutex poisoned");
        if inner.busy {
            return Err(ActionError::Busy);
        }
        let completed: Vec<String> = inner
            .mailing
            .values()
            .map(|record| record.name.clone())
            .collect();
        inner.mailing.clear();
        inner.done.extend(completed.iter().cloned());
        Ok(CompletionReport { completed })
    }
}

#[derive(Default)]
pub(super) struct CountingRefresh {
    count: AtomicUsize,
}

impl RefreshSignal for CountingRefresh {
    fn request_refresh(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

impl CountingRefresh {
    pub(super) fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

pub(super) fn desk(
    store: Arc<MemoryCollections>,
) -> (
    Arc<CountingRefresh>,
    RegistrationDesk<MemoryCollections, CountingRefresh>,
) {
    let refresh = Arc::new(CountingRefresh::default());
    let desk = RegistrationDesk::new(store, refresh.clone());
    (refresh, desk)
}
