use serde::Serialize;

use saq_model::{Question, Response, ResponseMap, ResponseStore};

/// The three logical sections of an SAQ: merchant details, the requirement
/// body (including appendices), and the attestation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    One,
    Two,
    Three,
}

/// Classifies a heading by substring, in priority order. Headings matching
/// none of the predicates belong to no section and are excluded from counts.
pub fn classify_heading(heading: &str) -> Option<Section> {
    if heading.contains("Section 1") {
        Some(Section::One)
    } else if heading.contains("Requirement") || heading.contains("Appendix") {
        Some(Section::Two)
    } else if heading.contains("Section 3") {
        Some(Section::Three)
    } else {
        None
    }
}

pub fn classify_question(question: &Question) -> Option<Section> {
    question
        .section_heading
        .as_deref()
        .and_then(classify_heading)
}

/// Question list partitioned by section.
#[derive(Debug, Clone, Default)]
pub struct SectionGroups<'a> {
    pub section1: Vec<&'a Question>,
    pub section2: Vec<&'a Question>,
    pub section3: Vec<&'a Question>,
}

/// Partitions whatever list it is given; works over either pipeline stage.
pub fn group_questions_by_sections<'a>(questions: &[&'a Question]) -> SectionGroups<'a> {
    let mut groups = SectionGroups::default();
    for question in questions.iter().copied() {
        match classify_question(question) {
            Some(Section::One) => groups.section1.push(question),
            Some(Section::Two) => groups.section2.push(question),
            Some(Section::Three) => groups.section3.push(question),
            None => {}
        }
    }
    groups
}

/// Completion counters for one section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

impl SectionProgress {
    fn tally(questions: &[&Question], responses: Option<&ResponseMap>) -> Self {
        let total = questions.len();
        let answered = questions
            .iter()
            .filter(|question| {
                responses
                    .and_then(|map| map.get(&question.id))
                    .is_some_and(Response::counts_as_answered)
            })
            .count();
        SectionProgress {
            answered,
            total,
            complete: total == 0 || answered == total,
        }
    }
}

/// Per-section progress for one questionnaire instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionProgressSummary {
    pub section1: SectionProgress,
    pub section2: SectionProgress,
    pub section3: SectionProgress,
}

/// Counts answered/total per section over the given list, which may be the
/// dependency-filtered or the UI-visible stage interchangeably — this never
/// filters, only classifies and counts.
///
/// An answer counts once it has a value and is not flagged
/// `requires_further_details` or `invalid`; see [`Response::counts_as_answered`].
pub fn calculate_section_progress(
    responses_by_questionnaire: &ResponseStore,
    questions: &[&Question],
    questionnaire_key: &str,
) -> SectionProgressSummary {
    let responses = responses_by_questionnaire.get(questionnaire_key);
    let groups = group_questions_by_sections(questions);
    SectionProgressSummary {
        section1: SectionProgress::tally(&groups.section1, responses),
        section2: SectionProgress::tally(&groups.section2, responses),
        section3: SectionProgress::tally(&groups.section3, responses),
    }
}
