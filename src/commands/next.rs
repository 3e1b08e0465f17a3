//! `showstage next`: list the stages recommended as the next action

use anyhow::Result;
use std::path::Path;

use crate::models::Status;

use super::evaluate_snapshot;

pub fn execute(state_path: &Path) -> Result<()> {
    print!("{}", render(state_path)?);
    Ok(())
}

/// One `id<TAB>title` line per recommended stage.
///
/// Prints nothing when no stage is recommended, so scripts can test for an
/// empty output.
pub fn render(state_path: &Path) -> Result<String> {
    let (graph, result) = evaluate_snapshot(state_path)?;

    let output = graph
        .stages()
        .filter(|stage| result.get(stage.id()) == Some(Status::Next))
        .map(|stage| {
            format!(
                "{}\t{}\n",
                stage.id(),
                stage.description().unwrap_or_default()
            )
        })
        .collect();

    Ok(output)
}
