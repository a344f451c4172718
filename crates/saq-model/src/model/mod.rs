pub mod question;
pub mod raw;
pub mod response;
pub mod status;

pub use question::{AnswerType, Dependency, DependencyCondition, DependencyLogic, DependsOn, Question};
pub use raw::{NormalizeError, RawField, RawProperties, RawQuestion, normalize_questions};
pub use response::{AnswerStatus, Response, ResponseMap, ResponseMetadata, ResponseStore};
pub use status::{LifecycleStatus, is_finalized};
