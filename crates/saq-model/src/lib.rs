#![allow(missing_docs)]

pub mod model;
pub mod normalize;

pub use model::question::{
    AnswerType, Dependency, DependencyCondition, DependencyLogic, DependsOn, Question,
};
pub use model::raw::{NormalizeError, RawField, RawProperties, RawQuestion, normalize_questions};
pub use model::response::{AnswerStatus, Response, ResponseMap, ResponseMetadata, ResponseStore};
pub use model::status::{LifecycleStatus, is_finalized};
pub use normalize::{
    NOT_APPLICABLE, is_not_applicable, normalize_not_applicable, values_equal, values_equal_cased,
};
