//! CLI subcommands

pub mod completions;
pub mod display;
pub mod graph;
pub mod next;
pub mod status;

use anyhow::{Context, Result};
use std::path::Path;

use crate::evaluator::{EvaluationResult, StatusEvaluator};
use crate::graph::StageGraph;
use crate::show::{load_state, setup_graph, ShowState};

/// Build the show setup graph and evaluate it against a snapshot file.
pub(crate) fn evaluate_snapshot(
    state_path: &Path,
) -> Result<(StageGraph<ShowState>, EvaluationResult)> {
    let state = load_state(state_path)?;
    let graph = setup_graph().context("Invalid show setup stage table")?;
    let result = StatusEvaluator::new(&graph)
        .evaluate(&state)
        .context("Failed to evaluate show setup stages")?;
    Ok((graph, result))
}
