use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use saq_model::{
    Dependency, DependencyCondition, DependencyLogic, Question, ResponseMap,
    normalize_not_applicable, values_equal,
};

/// Lookup from dependency uuid to question, built over the full (unfiltered)
/// question list. Dependencies may reference questions that are themselves
/// hidden, so the index must always cover the complete set.
pub fn uuid_index(questions: &[Question]) -> BTreeMap<&str, &Question> {
    questions
        .iter()
        .map(|question| (question.uuid.as_str(), question))
        .collect()
}

/// Decides whether a question's prerequisite block currently holds.
///
/// Questions without a `dependsOn` block are always visible. An empty
/// `direct` list is vacuously true for both AND and OR: no constraints means
/// unconstrained.
pub fn is_question_visible(
    question: &Question,
    responses: &ResponseMap,
    all_questions: &[Question],
) -> bool {
    let Some(depends_on) = &question.depends_on else {
        return true;
    };
    let index = uuid_index(all_questions);
    evaluate_block(depends_on.logic, &depends_on.direct, responses, &index)
}

pub(crate) fn evaluate_block(
    logic: DependencyLogic,
    direct: &[Dependency],
    responses: &ResponseMap,
    index: &BTreeMap<&str, &Question>,
) -> bool {
    match logic {
        DependencyLogic::And => direct
            .iter()
            .all(|dependency| dependency_met(dependency, responses, index)),
        DependencyLogic::Or => {
            direct.is_empty()
                || direct
                    .iter()
                    .any(|dependency| dependency_met(dependency, responses, index))
        }
    }
}

fn dependency_met(
    dependency: &Dependency,
    responses: &ResponseMap,
    index: &BTreeMap<&str, &Question>,
) -> bool {
    let Some(referenced) = index.get(dependency.question_uuid.as_str()) else {
        warn!(
            question_uuid = %dependency.question_uuid,
            "dependency references an unknown question, treating as unmet"
        );
        return false;
    };
    // An unanswered prerequisite hides the dependent question, whatever the
    // condition.
    let Some(response) = responses.get(&referenced.id) else {
        return false;
    };
    if !response.has_value() {
        return false;
    }
    evaluate_condition(&dependency.condition, &response.value, &dependency.expected_value)
}

fn evaluate_condition(condition: &DependencyCondition, actual: &Value, expected: &Value) -> bool {
    match condition {
        DependencyCondition::Equals => values_equal(actual, expected),
        DependencyCondition::NotEquals => !values_equal(actual, expected),
        DependencyCondition::Contains => contains(actual, expected).unwrap_or(false),
        DependencyCondition::NotContains => match contains(actual, expected) {
            Some(found) => !found,
            None => !values_equal(actual, expected),
        },
        DependencyCondition::HasAnyValue => has_any_value(actual),
        DependencyCondition::Other(label) => {
            warn!(condition = %label, "unknown dependency condition, treating as unmet");
            false
        }
    }
}

/// Array/string containment; `None` when the actual value supports neither
/// branch, so `not_contains` can fall back to plain inequality.
fn contains(actual: &Value, expected: &Value) -> Option<bool> {
    if let Some(items) = actual.as_array() {
        return Some(items.iter().any(|item| values_equal(item, expected)));
    }
    if let Some(text) = actual.as_str() {
        let needle = normalize_not_applicable(expected);
        let Some(needle) = needle.as_str() else {
            return Some(false);
        };
        let haystack = normalize_not_applicable(actual);
        let haystack = haystack.as_str().unwrap_or(text);
        return Some(haystack.to_lowercase().contains(&needle.to_lowercase()));
    }
    None
}

fn has_any_value(actual: &Value) -> bool {
    match actual {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::String(text) => !text.trim().is_empty(),
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::Object(_) => true,
    }
}
