use saq_model::{AnswerStatus, AnswerType, Question, ResponseMap};

use crate::sections::{Section, classify_question};

/// Index into the dependency-filtered (stage-1) list — the canonical space
/// navigation callbacks and persisted "current question" pointers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalIndex(pub usize);

/// Index into the UI-visible (stage-2) list. A distinct type from
/// [`GlobalIndex`] so the two spaces cannot be mixed up silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayIndex(pub usize);

/// Maps a stage-1 index to its stage-2 position by question id. `None` when
/// the question is filtered out of the display list; callers should then
/// [`reanchor`] rather than keep pointing at something that no longer shows.
pub fn display_index(
    stage1: &[&Question],
    stage2: &[&Question],
    global: GlobalIndex,
) -> Option<DisplayIndex> {
    let question = stage1.get(global.0)?;
    stage2
        .iter()
        .position(|candidate| candidate.id == question.id)
        .map(DisplayIndex)
}

/// Maps a stage-2 index back to its stage-1 position by question id.
pub fn global_index(
    stage1: &[&Question],
    stage2: &[&Question],
    display: DisplayIndex,
) -> Option<GlobalIndex> {
    let question = stage2.get(display.0)?;
    stage1
        .iter()
        .position(|candidate| candidate.id == question.id)
        .map(GlobalIndex)
}

/// Recovery when the current question disappears from the display list: land
/// on the first displayed question and report its stage-1 index so the caller
/// can correct its persisted pointer. `None` only when nothing displays.
pub fn reanchor(stage1: &[&Question], stage2: &[&Question]) -> Option<(GlobalIndex, DisplayIndex)> {
    let first = DisplayIndex(0);
    let global = global_index(stage1, stage2, first)?;
    Some((global, first))
}

/// Live editing state passed in by the caller, replacing what the source kept
/// as ambient singletons.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttentionContext<'a> {
    /// Question currently open in the editor, if any.
    pub editing_question_id: Option<&'a str>,
    /// Live validity of the in-flight edit, ahead of the stored status.
    pub editing_is_valid: bool,
}

/// Whether a question still needs the user's input: unanswered, structurally
/// incomplete (`array<object>`), or carrying a problem status.
///
/// The mid-edit carve-out keeps the question currently being corrected from
/// flashing back into the "needs attention" state before its stored status
/// catches up.
pub fn needs_attention(
    question: &Question,
    responses: &ResponseMap,
    context: &AttentionContext<'_>,
) -> bool {
    let Some(response) = responses.get(&question.id) else {
        return true;
    };
    if !response.has_value() {
        return true;
    }

    if question.answer_type == AnswerType::ArrayOfObjects
        && first_entry_incomplete(question, &response.value)
    {
        return true;
    }

    let problem_status = matches!(
        response.answer_status,
        Some(AnswerStatus::RequiresFurtherDetails) | Some(AnswerStatus::Invalid)
    );
    if problem_status {
        let mid_edit = context.editing_question_id == Some(question.id.as_str())
            && context.editing_is_valid;
        return !mid_edit;
    }
    false
}

fn first_entry_incomplete(question: &Question, value: &serde_json::Value) -> bool {
    let Some(entries) = value.as_array() else {
        return true;
    };
    let Some(first) = entries.first() else {
        return true;
    };
    question
        .required_fields
        .iter()
        .filter(|field| field.as_str() != "requirement")
        .any(|field| first.get(field).is_none_or(serde_json::Value::is_null))
}

/// Finds the next question needing attention, scanning the display list
/// strictly after `current` and wrapping around to just before it. The result
/// is handed back in the stage-1 space, where navigation callbacks live.
pub fn next_needing_attention(
    stage1: &[&Question],
    stage2: &[&Question],
    current: DisplayIndex,
    responses: &ResponseMap,
    context: &AttentionContext<'_>,
) -> Option<GlobalIndex> {
    let len = stage2.len();
    if len == 0 {
        return None;
    }
    let after = (current.0 + 1..len).map(DisplayIndex);
    let wrapped = (0..current.0.min(len)).map(DisplayIndex);
    after
        .chain(wrapped)
        .find(|candidate| needs_attention(stage2[candidate.0], responses, context))
        .and_then(|found| global_index(stage1, stage2, found))
}

/// Stage-1 index of a section's first question. Section jumps target the
/// canonical space so they stay valid when the display filter is toggled.
pub fn first_global_index_of_section(stage1: &[&Question], section: Section) -> Option<GlobalIndex> {
    stage1
        .iter()
        .position(|question| classify_question(question) == Some(section))
        .map(GlobalIndex)
}
