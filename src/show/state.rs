//! World-state snapshot read by the show setup stages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the show setup stages need to know about the ground station.
///
/// Every field defaults to its "nothing has happened yet" value, so a snapshot
/// file only needs to mention what has changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowState {
    pub show_file: ShowFileState,
    pub environment: EnvironmentState,
    pub takeoff_area: TakeoffAreaState,
    pub upload: UploadState,
    pub preflight: PreflightState,
    pub uavs: UavFleetState,
    pub start: StartConditionState,
    pub authorization: AuthorizationState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowFileState {
    pub loaded: bool,
    pub loading: bool,
}

/// Geographic origin of the show coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentState {
    pub origin: Option<Origin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TakeoffAreaState {
    pub approved: bool,
    /// Mapping slots with no UAV assigned
    pub empty_slots: Vec<usize>,
    /// UAVs in the mapping that are not seen by the ground station
    pub missing_uav_ids: Vec<String>,
}

/// Result of the most recent show upload attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadResult {
    Success,
    Error,
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadState {
    pub last_result: Option<UploadResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreflightState {
    pub onboard_signed_off: bool,
    pub manual_signed_off: bool,
    pub all_checks_ticked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UavFleetState {
    /// No UAV in the mission reports an error condition
    pub all_without_errors: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StartConditionState {
    pub synced_with_server: bool,
    pub sync_failed: bool,
    pub scheduled_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorizationState {
    pub authorized: bool,
    pub authorized_locally: bool,
}

impl ShowState {
    pub fn has_loaded_show_file(&self) -> bool {
        self.show_file.loaded
    }

    pub fn is_loading_show_file(&self) -> bool {
        self.show_file.loading
    }

    pub fn has_show_origin(&self) -> bool {
        self.environment.origin.is_some()
    }

    pub fn is_takeoff_area_approved(&self) -> bool {
        self.takeoff_area.approved
    }

    /// Every mapping slot has a UAV and every mapped UAV is present
    pub fn is_mapping_complete(&self) -> bool {
        self.takeoff_area.empty_slots.is_empty() && self.takeoff_area.missing_uav_ids.is_empty()
    }

    pub fn last_upload_result(&self) -> Option<UploadResult> {
        self.upload.last_result
    }

    pub fn are_onboard_preflight_checks_signed_off(&self) -> bool {
        self.preflight.onboard_signed_off
    }

    pub fn are_manual_preflight_checks_signed_off(&self) -> bool {
        self.preflight.manual_signed_off
    }

    pub fn are_all_preflight_checks_ticked(&self) -> bool {
        self.preflight.all_checks_ticked
    }

    pub fn are_all_uavs_without_errors(&self) -> bool {
        self.uavs.all_without_errors
    }

    pub fn are_start_conditions_synced(&self) -> bool {
        self.start.synced_with_server
    }

    pub fn did_start_condition_sync_fail(&self) -> bool {
        self.start.sync_failed
    }

    pub fn has_scheduled_start_time(&self) -> bool {
        self.start.scheduled_time.is_some()
    }

    pub fn is_authorized_to_start(&self) -> bool {
        self.authorization.authorized
    }

    pub fn is_authorized_to_start_locally(&self) -> bool {
        self.authorization.authorized_locally
    }
}
