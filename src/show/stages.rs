//! The stages an operator passes through to launch a drone show

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::error::GraphError;
use crate::graph::{Stage, StageGraph};
use crate::models::{Outcome, Status};

use super::state::{ShowState, UploadResult};

/// Identifiers of the show setup stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupStage {
    SelectShowFile,
    SetupEnvironment,
    SetupTakeoffArea,
    UploadShow,
    WaitForOnboardPreflightChecks,
    PerformManualPreflightChecks,
    SetupStartTime,
    Authorization,
}

impl SetupStage {
    /// Topological order: every stage comes after the stages it depends on.
    pub const ORDER: [SetupStage; 8] = [
        SetupStage::SelectShowFile,
        SetupStage::SetupEnvironment,
        SetupStage::SetupTakeoffArea,
        SetupStage::UploadShow,
        SetupStage::WaitForOnboardPreflightChecks,
        SetupStage::PerformManualPreflightChecks,
        SetupStage::SetupStartTime,
        SetupStage::Authorization,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SetupStage::SelectShowFile => "select-show-file",
            SetupStage::SetupEnvironment => "setup-environment",
            SetupStage::SetupTakeoffArea => "setup-takeoff-area",
            SetupStage::UploadShow => "upload-show",
            SetupStage::WaitForOnboardPreflightChecks => "wait-for-onboard-preflight-checks",
            SetupStage::PerformManualPreflightChecks => "perform-manual-preflight-checks",
            SetupStage::SetupStartTime => "setup-start-time",
            SetupStage::Authorization => "authorization",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SetupStage::SelectShowFile => "Select show file",
            SetupStage::SetupEnvironment => "Set up environment",
            SetupStage::SetupTakeoffArea => "Set up takeoff area",
            SetupStage::UploadShow => "Upload show data",
            SetupStage::WaitForOnboardPreflightChecks => "Wait for onboard preflight checks",
            SetupStage::PerformManualPreflightChecks => "Perform manual preflight checks",
            SetupStage::SetupStartTime => "Choose start time",
            SetupStage::Authorization => "Authorization to start",
        }
    }
}

impl fmt::Display for SetupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetupStage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        SetupStage::ORDER
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown setup stage: {s}"))
    }
}

fn stage<F, O>(id: SetupStage, evaluate: F) -> Stage<ShowState>
where
    F: Fn(&ShowState) -> O + Send + Sync + 'static,
    O: Into<Outcome> + 'static,
{
    Stage::new(id.as_str(), evaluate).with_description(id.title())
}

fn ids<const N: usize>(stages: [SetupStage; N]) -> [&'static str; N] {
    stages.map(SetupStage::as_str)
}

/// Build the stage graph for launching a drone show.
pub fn setup_graph() -> Result<StageGraph<ShowState>, GraphError> {
    use SetupStage::*;

    let stages = vec![
        stage(SelectShowFile, |state: &ShowState| {
            if state.has_loaded_show_file() {
                Status::Success
            } else if state.is_loading_show_file() {
                Status::Waiting
            } else {
                Status::Off
            }
        }),
        stage(SetupEnvironment, |state: &ShowState| {
            state.has_loaded_show_file() && state.has_show_origin()
        })
        .requires(ids([SelectShowFile])),
        stage(SetupTakeoffArea, |state: &ShowState| {
            if !state.is_takeoff_area_approved() {
                Status::Off
            } else if state.is_mapping_complete() {
                Status::Success
            } else {
                Status::Skipped
            }
        })
        .requires(ids([SetupEnvironment])),
        stage(UploadShow, |state: &ShowState| match state.last_upload_result() {
            Some(UploadResult::Error) => Status::Error,
            Some(UploadResult::Cancelled) => Status::Skipped,
            Some(UploadResult::Success) => Status::Success,
            None => Status::Off,
        })
        .requires(ids([SelectShowFile, SetupEnvironment])),
        stage(WaitForOnboardPreflightChecks, |state: &ShowState| {
            if !state.are_onboard_preflight_checks_signed_off() {
                Status::Off
            } else if state.are_all_uavs_without_errors() {
                Status::Success
            } else {
                Status::Skipped
            }
        })
        .requires(ids([UploadShow])),
        stage(PerformManualPreflightChecks, |state: &ShowState| {
            if !state.are_manual_preflight_checks_signed_off() {
                Status::Off
            } else if state.are_all_preflight_checks_ticked() {
                Status::Success
            } else {
                Status::Skipped
            }
        })
        .requires(ids([UploadShow])),
        stage(SetupStartTime, |state: &ShowState| {
            if state.did_start_condition_sync_fail() {
                Status::Error
            } else if !state.are_start_conditions_synced() {
                Status::Waiting
            } else if state.has_scheduled_start_time() {
                Status::Success
            } else {
                Status::Off
            }
        })
        .requires(ids([SelectShowFile]))
        .suggests(ids([
            WaitForOnboardPreflightChecks,
            PerformManualPreflightChecks,
        ])),
        stage(Authorization, |state: &ShowState| {
            if state.is_authorized_to_start() {
                Status::Success
            } else if state.did_start_condition_sync_fail() {
                Status::Error
            } else if state.is_authorized_to_start_locally() {
                Status::Waiting
            } else {
                Status::Off
            }
        })
        .requires(ids([
            WaitForOnboardPreflightChecks,
            PerformManualPreflightChecks,
        ])),
    ];

    StageGraph::new(stages, ids(SetupStage::ORDER))
}
