//! Error types for stage graph construction and evaluation

use thiserror::Error;

/// Boxed error returned by a stage predicate.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration error detected while building a [`crate::StageGraph`].
///
/// These are fatal at startup: a graph that fails validation is never built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid stage id '{id}': {reason}")]
    InvalidStageId { id: String, reason: String },

    #[error("stage '{0}' is defined more than once")]
    DuplicateStage(String),

    #[error("stage '{0}' appears more than once in the stage order")]
    DuplicateInOrder(String),

    #[error("stage order references unknown stage '{0}'")]
    UnknownStageInOrder(String),

    #[error("stage '{0}' is missing from the stage order")]
    MissingFromOrder(String),

    #[error("stage '{stage}' is ordered before its requirement '{requirement}'")]
    RequirementOutOfOrder { stage: String, requirement: String },

    #[error("circular dependency detected: {}", .0.join(" -> "))]
    Cycle(Vec<String>),
}

/// A stage predicate failed during an evaluation pass.
///
/// The pass is abandoned; no partial result is produced.
#[derive(Debug, Error)]
#[error("failed to evaluate stage '{stage_id}'")]
pub struct EvaluationError {
    pub stage_id: String,
    #[source]
    pub source: PredicateError,
}
