//! Stage graph: immutable stage definitions plus a validated stage order

mod cycle;
mod scheduling;
mod stage;

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::GraphError;
use crate::validation::validate_stage_id;

pub use scheduling::Dependencies;
pub use stage::{Predicate, Stage};

/// A fixed set of stages arranged in a topological order of their `requires`
/// edges.
///
/// The graph is read-only once built. Construction refuses any order that
/// would let a stage be evaluated before one of its requirements.
pub struct StageGraph<S> {
    /// Stages arranged in stage order
    stages: Vec<Stage<S>>,
    /// Map from stage ID to its position in `stages`
    index: HashMap<String, usize>,
}

impl<S> StageGraph<S> {
    /// Build a graph from stage definitions and an explicit stage order.
    ///
    /// The order must list every defined stage exactly once, and each stage
    /// must come after all of the stages it requires.
    pub fn new<I, T>(stages: Vec<Stage<S>>, order: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        check_definitions(&stages)?;

        let definition_order: Vec<String> = stages.iter().map(|s| s.id().to_string()).collect();
        let mut pending: HashMap<String, Stage<S>> = stages
            .into_iter()
            .map(|s| (s.id().to_string(), s))
            .collect();

        let mut ordered = Vec::with_capacity(pending.len());
        let mut index = HashMap::with_capacity(pending.len());

        for id in order {
            let id: String = id.into();
            if index.contains_key(&id) {
                return Err(GraphError::DuplicateInOrder(id));
            }
            let stage = pending
                .remove(&id)
                .ok_or_else(|| GraphError::UnknownStageInOrder(id.clone()))?;
            index.insert(id, ordered.len());
            ordered.push(stage);
        }

        if let Some(missing) = definition_order.into_iter().find(|id| pending.contains_key(id)) {
            return Err(GraphError::MissingFromOrder(missing));
        }

        scheduling::check_order(&ordered, &index)?;

        debug!(stages = ordered.len(), "built stage graph");

        Ok(Self {
            stages: ordered,
            index,
        })
    }

    /// Build a graph, deriving the stage order from the dependency edges.
    ///
    /// Suggested stages are placed before the stages suggesting them unless
    /// that conflicts with a `requires` edge, in which case only `requires`
    /// edges shape the order. Independent stages keep their relative
    /// definition order.
    pub fn from_stages(stages: Vec<Stage<S>>) -> Result<Self, GraphError> {
        check_definitions(&stages)?;

        let order = {
            let deps: Vec<(&str, &[String])> =
                stages.iter().map(|s| (s.id(), s.required())).collect();
            cycle::detect_cycles(&deps)?;

            let all_edges: Vec<Vec<String>> = stages
                .iter()
                .map(|s| s.required().iter().chain(s.suggested()).cloned().collect())
                .collect();
            let soft_deps: Vec<(&str, &[String])> = stages
                .iter()
                .zip(&all_edges)
                .map(|(s, edges)| (s.id(), edges.as_slice()))
                .collect();

            match scheduling::topological_sort(&soft_deps) {
                Ok(order) => order,
                Err(_) => {
                    debug!("suggestions form a cycle; ordering by requirements only");
                    scheduling::topological_sort(&deps)?
                }
            }
        };

        Self::new(stages, order)
    }

    /// Get a stage definition by ID
    pub fn stage(&self, id: &str) -> Option<&Stage<S>> {
        self.index.get(id).map(|&pos| &self.stages[pos])
    }

    /// Position of a stage in the stage order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate stages in stage order
    pub fn stages(&self) -> impl Iterator<Item = &Stage<S>> {
        self.stages.iter()
    }

    /// Iterate stage IDs in stage order
    pub fn order(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(Stage::id)
    }

    /// Stages that list `id` in their `requires`, in stage order
    pub fn dependents(&self, id: &str) -> Vec<&str> {
        self.stages
            .iter()
            .filter(|s| s.required().iter().any(|r| r == id))
            .map(Stage::id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<S> fmt::Debug for StageGraph<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageGraph")
            .field("stages", &self.stages)
            .finish()
    }
}

/// Reject invalid or duplicate stage IDs
fn check_definitions<S>(stages: &[Stage<S>]) -> Result<(), GraphError> {
    let mut seen = HashSet::with_capacity(stages.len());

    for stage in stages {
        validate_stage_id(stage.id()).map_err(|e| GraphError::InvalidStageId {
            id: stage.id().to_string(),
            reason: e.to_string(),
        })?;

        if !seen.insert(stage.id()) {
            return Err(GraphError::DuplicateStage(stage.id().to_string()));
        }
    }

    Ok(())
}
