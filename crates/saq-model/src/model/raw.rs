use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::question::{
    AnswerType, Dependency, DependencyCondition, DependencyLogic, DependsOn, Question,
};

/// Error raised while normalizing raw question records.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("question record at position {position} carries no id or uuid")]
    MissingId { position: usize },
}

/// Sub-field descriptor inside an `array<object>` question schema.
#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    pub id: String,
    #[serde(default)]
    pub required: bool,
}

/// One property bag of a raw question record. The platform emits the same
/// attributes under either `properties` or `rawProperties` depending on the
/// template revision, so every attribute is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperties {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub section_heading: Option<String>,
    #[serde(default)]
    pub answer_type: Option<String>,
    #[serde(default)]
    pub depends_on: Option<RawDependsOn>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDependsOn {
    #[serde(default)]
    pub logic: Option<String>,
    #[serde(default)]
    pub direct: Vec<RawDependency>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDependency {
    pub question_uuid: String,
    pub condition: String,
    #[serde(default)]
    pub expected_value: Value,
}

/// A question record as loaded from the platform API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub properties: Option<RawProperties>,
    #[serde(default)]
    pub raw_properties: Option<RawProperties>,
}

impl RawQuestion {
    fn pick<'a, T>(&'a self, select: impl Fn(&'a RawProperties) -> Option<T>) -> Option<T> {
        self.properties
            .as_ref()
            .and_then(&select)
            .or_else(|| self.raw_properties.as_ref().and_then(&select))
    }
}

fn parse_condition(label: &str) -> DependencyCondition {
    match label {
        "equals" => DependencyCondition::Equals,
        "not_equals" => DependencyCondition::NotEquals,
        "contains" => DependencyCondition::Contains,
        "not_contains" => DependencyCondition::NotContains,
        "has_any_value" => DependencyCondition::HasAnyValue,
        other => DependencyCondition::Other(other.to_string()),
    }
}

fn parse_depends_on(raw: &RawDependsOn) -> DependsOn {
    let logic = match raw.logic.as_deref() {
        Some("OR") => DependencyLogic::Or,
        _ => DependencyLogic::And,
    };
    let direct = raw
        .direct
        .iter()
        .map(|dependency| Dependency {
            question_uuid: dependency.question_uuid.clone(),
            condition: parse_condition(&dependency.condition),
            expected_value: dependency.expected_value.clone(),
        })
        .collect();
    DependsOn { logic, direct }
}

/// Normalizes raw platform records into the canonical [`Question`] shape.
///
/// Runs once at template load; everything downstream only ever sees the
/// canonical shape. The question id is resolved from `properties.id`, then
/// `rawProperties.id`, then the record uuid.
pub fn normalize_questions(raw: Vec<RawQuestion>) -> Result<Vec<Question>, NormalizeError> {
    raw.iter()
        .enumerate()
        .map(|(position, record)| normalize_question(record, position))
        .collect()
}

fn normalize_question(record: &RawQuestion, position: usize) -> Result<Question, NormalizeError> {
    let picked_id = record.pick(|props| props.id.clone());
    let id = picked_id
        .clone()
        .or_else(|| record.uuid.clone())
        .ok_or(NormalizeError::MissingId { position })?;
    let uuid = record.uuid.clone().unwrap_or_else(|| id.clone());

    let answer_type = match record.pick(|props| props.answer_type.as_deref()) {
        Some(label) => {
            let parsed = AnswerType::from_label(label);
            if parsed == AnswerType::Text && label != "text" {
                tracing::warn!(label, "unrecognized answer type, defaulting to text");
            }
            parsed
        }
        None => AnswerType::default(),
    };

    let required_fields = record
        .pick(|props| {
            if props.fields.is_empty() {
                None
            } else {
                Some(&props.fields)
            }
        })
        .map(|fields| {
            fields
                .iter()
                .filter(|field| field.required)
                .map(|field| field.id.clone())
                .collect()
        })
        .unwrap_or_default();

    Ok(Question {
        id,
        uuid,
        section_heading: record.pick(|props| props.section_heading.clone()),
        answer_type,
        depends_on: record.pick(|props| props.depends_on.as_ref()).map(parse_depends_on),
        group: record.pick(|props| props.group.clone()),
        required_fields,
    })
}
