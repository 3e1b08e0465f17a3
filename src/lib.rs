//! Stage dependency evaluation for drone show launch workflows.
//!
//! A [`graph::StageGraph`] holds a fixed set of stages linked by hard
//! (`requires`) and soft (`suggests`) prerequisites. A
//! [`evaluator::StatusEvaluator`] walks it once per world-state snapshot and
//! reports a [`models::Status`] for every stage, marking the recommended next
//! action with [`models::Status::Next`].

pub mod commands;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod graph;
pub mod logging;
pub mod models;
pub mod show;
pub mod validation;

pub use error::{EvaluationError, GraphError};
pub use evaluator::{EvaluationResult, StatusEvaluator};
pub use graph::{Stage, StageGraph};
pub use models::{Outcome, Status};
