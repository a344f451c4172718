use std::collections::BTreeMap;

use saq_model::{AnswerStatus, LifecycleStatus, Question, Response, ResponseMap, is_finalized};

use crate::dependency::{evaluate_block, uuid_index};

/// Caller-supplied context for the UI-visibility stage. Explicit values, never
/// ambient state: the toggle and lifecycle status both come from the caller on
/// every recomputation.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityContext {
    pub status: Option<LifecycleStatus>,
    /// User toggle: hide questions already validated by review.
    pub hide_valid: bool,
}

/// The three stages of one questionnaire's question list.
///
/// `source` is the full template (the lookup universe for dependencies),
/// `dependency_visible` is the canonical index space used for navigation and
/// persisted pointers, and `ui_visible` is what the user actually sees.
#[derive(Debug, Clone)]
pub struct QuestionStages<'a> {
    pub source: &'a [Question],
    pub dependency_visible: Vec<&'a Question>,
    pub ui_visible: Vec<&'a Question>,
}

/// Stage 1: questions whose prerequisite conditions currently hold.
pub fn filter_questions_by_dependency<'a>(
    questions: &'a [Question],
    responses: &ResponseMap,
) -> Vec<&'a Question> {
    let index = uuid_index(questions);
    questions
        .iter()
        .filter(|question| match &question.depends_on {
            Some(depends_on) => {
                evaluate_block(depends_on.logic, &depends_on.direct, responses, &index)
            }
            None => true,
        })
        .collect()
}

/// Stage 2: the dependency-visible list further reduced by answer-status and
/// finalization rules. `all_questions` must be the full stage-0 list so parent
/// lookups still resolve questions that are themselves filtered out.
pub fn filter_ui_visible<'a>(
    stage1: &[&'a Question],
    all_questions: &[Question],
    responses: &ResponseMap,
    context: &VisibilityContext,
) -> Vec<&'a Question> {
    let index = uuid_index(all_questions);
    stage1
        .iter()
        .copied()
        .filter(|question| keeps_ui_visibility(question, responses, &index, context))
        .collect()
}

/// Runs both filter stages from the raw inputs.
pub fn build_stages<'a>(
    questions: &'a [Question],
    responses: &ResponseMap,
    context: &VisibilityContext,
) -> QuestionStages<'a> {
    let dependency_visible = filter_questions_by_dependency(questions, responses);
    let ui_visible = filter_ui_visible(&dependency_visible, questions, responses, context);
    QuestionStages {
        source: questions,
        dependency_visible,
        ui_visible,
    }
}

fn keeps_ui_visibility(
    question: &Question,
    responses: &ResponseMap,
    index: &BTreeMap<&str, &Question>,
    context: &VisibilityContext,
) -> bool {
    let response = responses.get(&question.id);

    if context.hide_valid && response.is_some_and(Response::is_validated) {
        return false;
    }

    if is_finalized(context.status) {
        return keeps_finalized_visibility(question, response, responses, index);
    }

    true
}

/// Review-mode rules. Once finalized, the wizard only surfaces questions that
/// still need the user's input.
fn keeps_finalized_visibility(
    question: &Question,
    response: Option<&Response>,
    responses: &ResponseMap,
    index: &BTreeMap<&str, &Question>,
) -> bool {
    match &question.depends_on {
        Some(depends_on) => {
            if !evaluate_block(depends_on.logic, &depends_on.direct, responses, index) {
                return false;
            }
            // One-hop cascade: a parent sent back for further details drags its
            // dependents back into view regardless of their own status.
            let parent_requires_details = depends_on.direct.iter().any(|dependency| {
                index
                    .get(dependency.question_uuid.as_str())
                    .and_then(|parent| responses.get(&parent.id))
                    .is_some_and(|parent_response| {
                        parent_response.answer_status == Some(AnswerStatus::RequiresFurtherDetails)
                    })
            });
            if parent_requires_details {
                return true;
            }
            !has_status(response, AnswerStatus::RequiresReview)
        }
        None => {
            if has_status(response, AnswerStatus::RequiresReview) {
                return false;
            }
            // Never answered at all: nothing left to review here.
            response.is_some()
        }
    }
}

fn has_status(response: Option<&Response>, status: AnswerStatus) -> bool {
    response.is_some_and(|response| response.answer_status == Some(status))
}
