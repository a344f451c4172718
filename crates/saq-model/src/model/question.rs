use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer widget kind for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    #[default]
    Text,
    Boolean,
    Date,
    MultiSelect,
    Enum,
    #[serde(rename = "array<object>")]
    ArrayOfObjects,
    Object,
    Computed,
    SectionHeader,
    Note,
}

impl AnswerType {
    /// Parses a wire label, falling back to `Text` for anything unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label {
            "text" => AnswerType::Text,
            "boolean" => AnswerType::Boolean,
            "date" => AnswerType::Date,
            "multi_select" => AnswerType::MultiSelect,
            "enum" => AnswerType::Enum,
            "array<object>" => AnswerType::ArrayOfObjects,
            "object" => AnswerType::Object,
            "computed" => AnswerType::Computed,
            "section_header" => AnswerType::SectionHeader,
            "note" => AnswerType::Note,
            _ => AnswerType::Text,
        }
    }
}

/// Combinator applied across the entries of `DependsOn::direct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DependencyLogic {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// Comparison operator for a single dependency.
///
/// Unknown operators deserialize into `Other` so a malformed template degrades to
/// "dependency unmet" instead of failing the whole questionnaire load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DependencyCondition {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    HasAnyValue,
    #[serde(untagged)]
    Other(String),
}

/// One prerequisite: the referenced question's answer must satisfy `condition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub question_uuid: String,
    pub condition: DependencyCondition,
    #[serde(default)]
    pub expected_value: Value,
}

/// Prerequisite block for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DependsOn {
    pub logic: DependencyLogic,
    #[serde(default)]
    pub direct: Vec<Dependency>,
}

/// One questionnaire item in its canonical shape.
///
/// Loaded once per template via [`crate::model::raw::normalize_questions`] and
/// read-only thereafter. `id` keys responses; `uuid` is the namespace dependencies
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_heading: Option<String>,
    #[serde(default)]
    pub answer_type: AnswerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    /// Role tag used for field-level access control; opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Required sub-field ids for `array<object>` answers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_fields: Vec<String>,
}

impl Question {
    /// True when this question carries a prerequisite block at all.
    pub fn has_dependencies(&self) -> bool {
        self.depends_on.is_some()
    }
}
