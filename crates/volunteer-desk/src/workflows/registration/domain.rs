use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for volunteer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VolunteerId(pub u64);

impl fmt::Display for VolunteerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A volunteer application and its contact attributes, as mirrored from the
/// external collection API. The record carries no stage field: stage is derived
/// from which collection currently owns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerRecord {
    pub id: VolunteerId,
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub telegram_username: String,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Where a record sits in the registration pipeline.
///
/// Transitions are linear and forward-only: new → waiting → mailing → done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    New,
    Waiting,
    Mailing,
    Done,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::Waiting => "waiting",
            Stage::Mailing => "mailing",
            Stage::Done => "done",
        }
    }

    /// The stage a record moves to when its forward action succeeds.
    pub const fn next(self) -> Option<Stage> {
        match self {
            Stage::New => Some(Stage::Waiting),
            Stage::Waiting => Some(Stage::Mailing),
            Stage::Mailing => Some(Stage::Done),
            Stage::Done => None,
        }
    }

    /// The one forward action valid at this stage. `Done` is terminal.
    pub const fn action(self) -> Option<StageAction> {
        match self {
            Stage::New => Some(StageAction::Verify),
            Stage::Waiting => Some(StageAction::Approve),
            Stage::Mailing => Some(StageAction::CompleteAll),
            Stage::Done => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Forward actions exposed by the stage transition controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageAction {
    Verify,
    Approve,
    CompleteAll,
}

impl StageAction {
    pub const fn label(self) -> &'static str {
        match self {
            StageAction::Verify => "verify",
            StageAction::Approve => "approve",
            StageAction::CompleteAll => "complete-all",
        }
    }
}

impl fmt::Display for StageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the three remote collections a live record can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    New,
    Waiting,
    Mailing,
}

impl Collection {
    /// Probe order for the resolver. Fresh records are the common case, so the
    /// "new" collection is checked first; the order also breaks ties should the
    /// exclusivity invariant ever be violated upstream.
    pub const PRIORITY: [Collection; 3] = [Collection::New, Collection::Waiting, Collection::Mailing];

    pub const fn stage(self) -> Stage {
        match self {
            Collection::New => Stage::New,
            Collection::Waiting => Stage::Waiting,
            Collection::Mailing => Stage::Mailing,
        }
    }

    /// URL path segment on the external collection API.
    pub const fn segment(self) -> &'static str {
        match self {
            Collection::New => "new",
            Collection::Waiting => "waiting",
            Collection::Mailing => "mailing",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// A record together with the stage derived from the collection that owned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVolunteer {
    pub record: VolunteerRecord,
    pub stage: Stage,
}

impl ResolvedVolunteer {
    /// The forward action available for this record, if any.
    pub fn available_action(&self) -> Option<StageAction> {
        self.stage.action()
    }
}

/// Snapshot of the three listed collections rendered by the listing view.
///
/// The copies are stale the moment they are fetched; callers refresh after
/// mutations via the controller's refresh signal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationBoard {
    pub new: Vec<VolunteerRecord>,
    pub waiting: Vec<VolunteerRecord>,
    pub mailing: Vec<VolunteerRecord>,
}

impl RegistrationBoard {
    pub fn total(&self) -> usize {
        self.new.len() + self.waiting.len() + self.mailing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
