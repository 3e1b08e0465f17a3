//! `showstage status`: evaluate every setup stage for a snapshot

use anyhow::Result;
use std::path::Path;

use crate::config::OutputFormat;

use super::display::status_table;
use super::evaluate_snapshot;

pub fn execute(state_path: &Path, format: OutputFormat) -> Result<()> {
    print!("{}", render(state_path, format)?);
    Ok(())
}

pub fn render(state_path: &Path, format: OutputFormat) -> Result<String> {
    let (graph, result) = evaluate_snapshot(state_path)?;

    let output = match format {
        OutputFormat::Table => status_table(&graph, &result),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&result)?),
        OutputFormat::Yaml => serde_yaml::to_string(&result)?,
    };

    Ok(output)
}
