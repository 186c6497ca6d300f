use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use volunteer_desk::config::AppConfig;
use volunteer_desk::error::AppError;
use volunteer_desk::gateway::HttpCollectionStore;
use volunteer_desk::workflows::registration::{RefreshSignal, RegistrationDesk};

/// Flag raised by the transition controller after a successful mutation; the
/// CLI drains it to decide whether to reload and reprint the board.
#[derive(Default)]
pub(crate) struct RefreshFlag {
    requested: AtomicBool,
}

impl RefreshSignal for RefreshFlag {
    fn request_refresh(&self) {
        self.requested.store(true, Ordering::Release);
    }
}

impl RefreshFlag {
    pub(crate) fn take(&self) -> bool {
        self.requested.swap(false, Ordering::AcqRel)
    }
}

pub(crate) type AdminDesk = RegistrationDesk<HttpCollectionStore, RefreshFlag>;

pub(crate) fn build_desk(config: &AppConfig) -> Result<(Arc<RefreshFlag>, AdminDesk), AppError> {
    let store = HttpCollectionStore::new(config.api.base_url.clone(), config.api.timeout())?;
    let refresh = Arc::new(RefreshFlag::default());
    let desk = RegistrationDesk::new(Arc::new(store), refresh.clone());
    Ok((refresh, desk))
}
