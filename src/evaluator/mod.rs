//! Status evaluation over a stage graph
//!
//! Stages are visited once, in stage order. A stage whose requirements are not
//! all done is `Off` and its predicate is never run. Otherwise the predicate's
//! outcome is used, except that an `Off` outcome becomes `Next` when every
//! suggested stage is done.

mod result;


use tracing::{debug, trace};

use crate::error::EvaluationError;
use crate::graph::StageGraph;
use crate::models::Status;

pub use result::EvaluationResult;

/// Computes an [`EvaluationResult`] for a world-state snapshot.
///
/// Holds no state between calls; each call builds a fresh result.
#[derive(Debug)]
pub struct StatusEvaluator<'g, S> {
    graph: &'g StageGraph<S>,
}

impl<S> Clone for StatusEvaluator<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StatusEvaluator<'_, S> {}

impl<'g, S> StatusEvaluator<'g, S> {
    pub fn new(graph: &'g StageGraph<S>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g StageGraph<S> {
        self.graph
    }

    /// Evaluate every stage against `state`.
    ///
    /// A failing predicate aborts the pass and its error is returned as the
    /// source of an [`EvaluationError`].
    pub fn evaluate(&self, state: &S) -> Result<EvaluationResult, EvaluationError> {
        let mut result = EvaluationResult::with_capacity(self.graph.len());

        for stage in self.graph.stages() {
            let status = if result.all_done(stage.required()) {
                let own = stage
                    .evaluate(state)
                    .map_err(|source| EvaluationError {
                        stage_id: stage.id().to_string(),
                        source,
                    })?
                    .into_status();

                if own == Status::Off && result.all_done(stage.suggested()) {
                    Status::Next
                } else {
                    own
                }
            } else {
                Status::Off
            };

            trace!(stage = stage.id(), %status, "evaluated stage");
            result.insert(stage.id(), status);
        }

        debug!(
            stages = result.len(),
            next = ?result.next_stages(),
            "evaluated stage statuses"
        );

        Ok(result)
    }
}
