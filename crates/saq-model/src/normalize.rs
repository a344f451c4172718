use std::borrow::Cow;

use serde_json::Value;

/// Canonical sentinel every Not-Applicable spelling collapses to.
pub const NOT_APPLICABLE: &str = "NOT_APPLICABLE";

const NOT_APPLICABLE_FORMS: [&str; 8] = [
    "not applicable",
    "not-applicable",
    "notapplicable",
    "n/a",
    "na",
    "n.a.",
    "n.a",
    "not_applicable",
];

/// True when the trimmed, lower-cased text is one of the accepted
/// Not-Applicable spellings.
pub fn is_not_applicable(text: &str) -> bool {
    let folded = text.trim().to_lowercase();
    NOT_APPLICABLE_FORMS.contains(&folded.as_str())
}

/// Collapses Not-Applicable string variants to [`NOT_APPLICABLE`]; any other
/// value passes through untouched.
pub fn normalize_not_applicable(value: &Value) -> Cow<'_, Value> {
    match value.as_str() {
        Some(text) if is_not_applicable(text) => {
            Cow::Owned(Value::String(NOT_APPLICABLE.to_string()))
        }
        _ => Cow::Borrowed(value),
    }
}

/// Equality after Not-Applicable normalization: case-insensitive when both
/// sides are strings, strict otherwise.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    compare(a, b, true)
}

/// Case-sensitive variant of [`values_equal`].
pub fn values_equal_cased(a: &Value, b: &Value) -> bool {
    compare(a, b, false)
}

fn compare(a: &Value, b: &Value, case_insensitive: bool) -> bool {
    let a = normalize_not_applicable(a);
    let b = normalize_not_applicable(b);
    match (a.as_str(), b.as_str()) {
        (Some(left), Some(right)) if case_insensitive => left.eq_ignore_ascii_case(right),
        _ => a.as_ref() == b.as_ref(),
    }
}
