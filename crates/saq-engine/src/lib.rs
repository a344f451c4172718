#![allow(missing_docs)]

pub mod dependency;
pub mod navigation;
pub mod sections;
pub mod visibility;

pub use dependency::{is_question_visible, uuid_index};
pub use navigation::{
    AttentionContext, DisplayIndex, GlobalIndex, display_index, first_global_index_of_section,
    global_index, needs_attention, next_needing_attention, reanchor,
};
pub use sections::{
    Section, SectionGroups, SectionProgress, SectionProgressSummary, calculate_section_progress,
    classify_heading, classify_question, group_questions_by_sections,
};
pub use visibility::{
    QuestionStages, VisibilityContext, build_stages, filter_questions_by_dependency,
    filter_ui_visible,
};
