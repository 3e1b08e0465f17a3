//! Drone show launch workflow
//!
//! This module handles:
//! - The world-state snapshot read by the setup stages
//! - The fixed table of setup stages and their order
//! - Loading snapshots from YAML or JSON files

mod stages;
mod state;

#[cfg(test)]
mod tests;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

pub use stages::{setup_graph, SetupStage};
pub use state::{
    AuthorizationState, EnvironmentState, Origin, PreflightState, ShowFileState, ShowState,
    StartConditionState, TakeoffAreaState, UavFleetState, UploadResult, UploadState,
};

/// Load a show state snapshot, picking the format from the file extension.
///
/// `.yaml`/`.yml` files are parsed as YAML and `.json` files as JSON.
pub fn load_state(path: &Path) -> Result<ShowState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read show state: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML show state: {}", path.display())),
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON show state: {}", path.display())),
        _ => bail!(
            "Unsupported show state format: {} (expected .yaml, .yml or .json)",
            path.display()
        ),
    }
}
