use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{Collection, ResolvedVolunteer, VolunteerId};
use super::store::{CollectionStore, TransportError};

/// Determines which collection currently owns an identifier by probing the
/// collections in [`Collection::PRIORITY`] order until one answers with the
/// record.
pub struct RecordResolver<S> {
    store: Arc<S>,
}

impl<S> RecordResolver<S>
where
    S: CollectionStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolve an identifier to its record and stage.
    ///
    /// A probe answering "absent" falls through to the next collection. A probe
    /// failing on transport is remembered and probing continues, since a later
    /// collection may still definitively own the record; if the record is never
    /// found, a failed probe turns the outcome into [`ResolveError::Unreachable`]
    /// rather than `NotFound`: absence is only reported once every collection
    /// has definitively denied the identifier.
    pub async fn resolve(&self, id: VolunteerId) -> Result<ResolvedVolunteer, ResolveError> {
        let mut first_failure: Option<(Collection, TransportError)> = None;

        for collection in Collection::PRIORITY {
            match self.store.fetch(collection, id).await {
                Ok(Some(record)) => {
                    debug!(%id, %collection, "record resolved");
                    return Ok(ResolvedVolunteer {
                        record,
                        stage: collection.stage(),
                    });
                }
                Ok(None) => {
                    debug!(%id, %collection, "probe: absent");
                }
                Err(err) => {
                    warn!(%id, %collection, error = %err, "probe failed");
                    if first_failure.is_none() {
                        first_failure = Some((collection, err));
                    }
                }
            }
        }

        match first_failure {
            Some((collection, source)) => Err(ResolveError::Unreachable { collection, source }),
            None => Err(ResolveError::NotFound),
        }
    }
}

/// Terminal outcomes of a resolution attempt.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Every collection definitively denied the identifier.
    #[error("record not present in any collection")]
    NotFound,
    /// At least one probe failed on transport and the record was not found in
    /// the collections that did answer, so absence cannot be concluded.
    #[error("could not check the '{collection}' collection: {source}")]
    Unreachable {
        collection: Collection,
        #[source]
        source: TransportError,
    },
}
