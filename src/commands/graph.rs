//! `showstage graph`: show the setup stages and their dependencies

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::config::OutputFormat;
use crate::evaluator::EvaluationResult;
use crate::graph::StageGraph;
use crate::models::Status;
use crate::show::{setup_graph, ShowState};

use super::display::graph_listing;
use super::evaluate_snapshot;

/// Serializable view of one stage definition
#[derive(Debug, Serialize)]
struct StageEntry<'a> {
    id: &'a str,
    title: Option<&'a str>,
    requires: &'a [String],
    suggests: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<Status>,
}

pub fn execute(state_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    print!("{}", render(state_path, format)?);
    Ok(())
}

/// Render the stage graph, annotated with statuses when a snapshot is given.
pub fn render(state_path: Option<&Path>, format: OutputFormat) -> Result<String> {
    let (graph, result) = match state_path {
        Some(path) => {
            let (graph, result) = evaluate_snapshot(path)?;
            (graph, Some(result))
        }
        None => (
            setup_graph().context("Invalid show setup stage table")?,
            None,
        ),
    };

    let output = match format {
        OutputFormat::Table => graph_listing(&graph, result.as_ref()),
        OutputFormat::Json => {
            let entries = entries(&graph, result.as_ref());
            format!("{}\n", serde_json::to_string_pretty(&entries)?)
        }
        OutputFormat::Yaml => serde_yaml::to_string(&entries(&graph, result.as_ref()))?,
    };

    Ok(output)
}

fn entries<'a>(
    graph: &'a StageGraph<ShowState>,
    result: Option<&EvaluationResult>,
) -> Vec<StageEntry<'a>> {
    graph
        .stages()
        .map(|stage| StageEntry {
            id: stage.id(),
            title: stage.description(),
            requires: stage.required(),
            suggests: stage.suggested(),
            status: result.and_then(|r| r.get(stage.id())),
        })
        .collect()
}
