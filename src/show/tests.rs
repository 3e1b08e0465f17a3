//! Tests for the show setup workflow

use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use super::*;
use crate::evaluator::{EvaluationResult, StatusEvaluator};
use crate::models::Status;

fn evaluate(state: &ShowState) -> EvaluationResult {
    let graph = setup_graph().unwrap();
    StatusEvaluator::new(&graph).evaluate(state).unwrap()
}

fn status(result: &EvaluationResult, stage: SetupStage) -> Status {
    result.get(stage.as_str()).unwrap()
}

/// Snapshot where everything up to and including the upload is done
fn uploaded() -> ShowState {
    let mut state = ShowState::default();
    state.show_file.loaded = true;
    state.environment.origin = Some(Origin {
        lat: 47.4733,
        lon: 19.0612,
    });
    state.takeoff_area.approved = true;
    state.upload.last_result = Some(UploadResult::Success);
    state.start.synced_with_server = true;
    state
}

#[test]
fn test_graph_order_matches_stage_enum() {
    let graph = setup_graph().unwrap();
    let expected: Vec<&str> = SetupStage::ORDER.iter().map(|s| s.as_str()).collect();

    assert_eq!(graph.order().collect::<Vec<_>>(), expected);
}

#[test]
fn test_stage_ids_round_trip_through_from_str() {
    for stage in SetupStage::ORDER {
        assert_eq!(stage.as_str().parse::<SetupStage>().unwrap(), stage);
    }
    assert!("launch".parse::<SetupStage>().is_err());
}

#[test]
fn test_fresh_state_suggests_selecting_show_file() {
    let result = evaluate(&ShowState::default());

    assert_eq!(status(&result, SetupStage::SelectShowFile), Status::Next);
    assert_eq!(result.next_stages(), vec!["select-show-file"]);
    for stage in &SetupStage::ORDER[1..] {
        assert_eq!(status(&result, *stage), Status::Off, "{stage}");
    }
}

#[test]
fn test_loading_show_file_is_waiting() {
    let mut state = ShowState::default();
    state.show_file.loading = true;

    let result = evaluate(&state);

    assert_eq!(status(&result, SetupStage::SelectShowFile), Status::Waiting);
    assert!(result.next_stages().is_empty());
}

#[test]
fn test_loaded_show_file_unlocks_environment_and_start_time() {
    let mut state = ShowState::default();
    state.show_file.loaded = true;

    let result = evaluate(&state);

    assert_eq!(status(&result, SetupStage::SelectShowFile), Status::Success);
    assert_eq!(status(&result, SetupStage::SetupEnvironment), Status::Next);
    assert_eq!(status(&result, SetupStage::SetupTakeoffArea), Status::Off);
    assert_eq!(status(&result, SetupStage::UploadShow), Status::Off);
    // Start conditions not synced yet
    assert_eq!(status(&result, SetupStage::SetupStartTime), Status::Waiting);
}

#[test]
fn test_incomplete_mapping_skips_takeoff_area() {
    let mut state = uploaded();
    state.takeoff_area.empty_slots = vec![3, 7];

    let result = evaluate(&state);

    assert_eq!(status(&result, SetupStage::SetupTakeoffArea), Status::Skipped);
}

#[test]
fn test_upload_results() {
    let cases = [
        (None, Status::Next),
        (Some(UploadResult::Success), Status::Success),
        (Some(UploadResult::Cancelled), Status::Skipped),
        (Some(UploadResult::Error), Status::Error),
    ];

    for (upload, expected) in cases {
        let mut state = uploaded();
        state.upload.last_result = upload;

        let result = evaluate(&state);

        assert_eq!(status(&result, SetupStage::UploadShow), expected, "{upload:?}");
    }
}

#[test]
fn test_failed_upload_blocks_preflight_checks() {
    let mut state = uploaded();
    state.upload.last_result = Some(UploadResult::Error);
    state.preflight.onboard_signed_off = true;

    let result = evaluate(&state);

    assert_eq!(
        status(&result, SetupStage::WaitForOnboardPreflightChecks),
        Status::Off
    );
    assert_eq!(status(&result, SetupStage::Authorization), Status::Off);
}

#[test]
fn test_start_time_waits_for_preflight_suggestions() {
    let result = evaluate(&uploaded());

    assert_eq!(
        status(&result, SetupStage::WaitForOnboardPreflightChecks),
        Status::Next
    );
    assert_eq!(
        status(&result, SetupStage::PerformManualPreflightChecks),
        Status::Next
    );
    assert_eq!(status(&result, SetupStage::SetupStartTime), Status::Off);
}

#[test]
fn test_start_time_suggested_after_preflight_checks() {
    let mut state = uploaded();
    state.preflight.onboard_signed_off = true;
    state.preflight.manual_signed_off = true;

    let result = evaluate(&state);

    // Signed off with outstanding issues still counts as done
    assert_eq!(
        status(&result, SetupStage::WaitForOnboardPreflightChecks),
        Status::Skipped
    );
    assert_eq!(
        status(&result, SetupStage::PerformManualPreflightChecks),
        Status::Skipped
    );
    assert_eq!(status(&result, SetupStage::SetupStartTime), Status::Next);
    assert_eq!(status(&result, SetupStage::Authorization), Status::Next);
}

#[test]
fn test_sync_failure_marks_start_time_and_authorization_as_errors() {
    let mut state = uploaded();
    state.preflight.onboard_signed_off = true;
    state.preflight.manual_signed_off = true;
    state.start.sync_failed = true;

    let result = evaluate(&state);

    assert_eq!(status(&result, SetupStage::SetupStartTime), Status::Error);
    assert_eq!(status(&result, SetupStage::Authorization), Status::Error);
}

#[test]
fn test_local_authorization_is_waiting() {
    let mut state = uploaded();
    state.preflight.onboard_signed_off = true;
    state.preflight.manual_signed_off = true;
    state.authorization.authorized_locally = true;

    let result = evaluate(&state);

    assert_eq!(status(&result, SetupStage::Authorization), Status::Waiting);
}

#[test]
fn test_fully_prepared_show_is_complete() {
    let mut state = uploaded();
    state.uavs.all_without_errors = true;
    state.preflight.onboard_signed_off = true;
    state.preflight.manual_signed_off = true;
    state.preflight.all_checks_ticked = true;
    state.start.scheduled_time = Some(Utc.with_ymd_and_hms(2026, 10, 17, 20, 30, 0).unwrap());
    state.authorization.authorized = true;

    let result = evaluate(&state);

    for stage in SetupStage::ORDER {
        assert_eq!(status(&result, stage), Status::Success, "{stage}");
    }
    assert!(result.is_complete());
    assert!(result.next_stages().is_empty());
}

#[test]
fn test_load_state_from_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.yaml");
    fs::write(
        &path,
        "show_file:\n  loaded: true\nupload:\n  last_result: cancelled\nstart:\n  scheduled_time: 2026-10-17T20:30:00Z\n",
    )
    .unwrap();

    let state = load_state(&path).unwrap();

    assert!(state.has_loaded_show_file());
    assert_eq!(state.last_upload_result(), Some(UploadResult::Cancelled));
    assert!(state.has_scheduled_start_time());
    assert!(!state.has_show_origin());
}

#[test]
fn test_load_state_from_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    fs::write(
        &path,
        r#"{"environment": {"origin": {"lat": 47.5, "lon": 19.0}}, "authorization": {"authorized": true}}"#,
    )
    .unwrap();

    let state = load_state(&path).unwrap();

    assert!(state.has_show_origin());
    assert!(state.is_authorized_to_start());
    assert!(!state.has_loaded_show_file());
}

#[test]
fn test_load_state_rejects_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.yaml");
    fs::write(&path, "show_file:\n  loded: true\n").unwrap();

    let err = load_state(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse YAML"));
}

#[test]
fn test_load_state_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.txt");
    fs::write(&path, "{}").unwrap();

    let err = load_state(&path).unwrap_err();
    assert!(err.to_string().contains("Unsupported show state format"));
}
