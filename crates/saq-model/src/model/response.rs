use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Review state attached to a stored answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    Pending,
    Valid,
    Invalid,
    RequiresFurtherDetails,
    RequiresReview,
}

/// Side-channel flags carried alongside an answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResponseMetadata {
    /// Shadow status; `valid` here hides the question the same way
    /// `answer_status == valid` does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_status: Option<AnswerStatus>,
}

/// A stored answer for one question within a questionnaire instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The user's answer; `Null` means unanswered.
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_status: Option<AnswerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

impl Response {
    /// True when an answer value is present.
    pub fn has_value(&self) -> bool {
        !self.value.is_null()
    }

    /// True when either the answer status or the shadow status says `valid`.
    pub fn is_validated(&self) -> bool {
        self.answer_status == Some(AnswerStatus::Valid)
            || self
                .metadata
                .as_ref()
                .is_some_and(|meta| meta.temp_status == Some(AnswerStatus::Valid))
    }

    /// Progress rule: an answer counts once a value exists and the status is not
    /// one of the two problem statuses. `requires_review` and `pending` still count.
    pub fn counts_as_answered(&self) -> bool {
        self.has_value()
            && !matches!(
                self.answer_status,
                Some(AnswerStatus::RequiresFurtherDetails) | Some(AnswerStatus::Invalid)
            )
    }
}

/// Answers for one questionnaire instance, keyed by question id.
pub type ResponseMap = BTreeMap<String, Response>;

/// Answers across questionnaire instances, keyed by questionnaire.
pub type ResponseStore = BTreeMap<String, ResponseMap>;
