use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where a questionnaire instance sits in its review lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    Draft,
    InProgress,
    InfoRequested,
    ProvidingInfo,
    Submitted,
    Approved,
}

impl LifecycleStatus {
    /// A questionnaire is finalized once it has left the editing states.
    /// Finalization switches the UI-visibility stage into review mode.
    pub fn is_finalized(self) -> bool {
        !matches!(self, LifecycleStatus::Draft | LifecycleStatus::InProgress)
    }
}

/// Absent status means the instance was never submitted, so not finalized.
pub fn is_finalized(status: Option<LifecycleStatus>) -> bool {
    status.is_some_and(LifecycleStatus::is_finalized)
}
