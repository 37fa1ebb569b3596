// crates/flow-generator-client/tests/interpret_response_unit.rs
// ============================================================================
// Module: Response Interpretation Tests
// Description: Status and body mapping without network access.
// Purpose: Pin the outcome contract for each response shape.
// ============================================================================

//! ## Overview
//! Drives [`interpret_response`] directly with canned status codes and bodies.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use flow_generator_client::FailureReason;
use flow_generator_client::FlowGeneratorError;
use flow_generator_client::FlowOutcome;
use flow_generator_client::PredictResponse;
use flow_generator_client::interpret_response;

#[test]
fn success_uses_first_candidate_only() {
    let body = br#"{"sequences": [["enter", "textbox", "lastname"], ["click", "button"]]}"#;
    let outcome = interpret_response(200, body).unwrap();
    assert_eq!(outcome, FlowOutcome::Flow("ENTER TEXTBOX LASTNAME".to_string()));
}

#[test]
fn success_with_empty_sequences_is_no_candidate() {
    let outcome = interpret_response(200, br#"{"sequences": []}"#).unwrap();
    assert_eq!(outcome, FlowOutcome::NoCandidate);
    assert_eq!(outcome.flow(), None);
}

#[test]
fn empty_top_candidate_is_empty_flow() {
    let outcome = interpret_response(200, br#"{"sequences": [[]]}"#).unwrap();
    assert_eq!(outcome, FlowOutcome::Flow(String::new()));
}

#[test]
fn non_success_status_ignores_body() {
    for status in [201, 204, 301, 400, 404, 500, 503] {
        let outcome = interpret_response(status, b"not json at all").unwrap();
        assert_eq!(outcome, FlowOutcome::Failure(FailureReason::ServiceStatus(status)));
    }
}

#[test]
fn null_top_candidate_is_malformed() {
    let outcome = interpret_response(200, br#"{"sequences": [null]}"#).unwrap();
    assert_eq!(outcome, FlowOutcome::Failure(FailureReason::MalformedCandidate));
}

#[test]
fn non_string_token_is_malformed() {
    let outcome = interpret_response(200, br#"{"sequences": [["observe", 42]]}"#).unwrap();
    assert_eq!(outcome, FlowOutcome::Failure(FailureReason::MalformedCandidate));
}

#[test]
fn malformed_later_candidate_is_ignored() {
    let outcome = interpret_response(200, br#"{"sequences": [["observe"], null]}"#).unwrap();
    assert_eq!(outcome, FlowOutcome::Flow("OBSERVE".to_string()));
}

#[test]
fn undecodable_success_body_is_error() {
    let result = interpret_response(200, b"<html>");
    assert!(matches!(result, Err(FlowGeneratorError::InvalidResponse(_))));
}

#[test]
fn sequences_must_be_an_array() {
    let result = interpret_response(200, br#"{"sequences": "observe"}"#);
    assert!(matches!(result, Err(FlowGeneratorError::InvalidResponse(_))));
}

#[test]
fn extra_response_fields_are_ignored() {
    let response =
        PredictResponse::from_slice(br#"{"sequences": [["observe"]], "scores": [0.9]}"#).unwrap();
    assert_eq!(response.sequences.len(), 1);
    assert_eq!(response.into_outcome(), FlowOutcome::Flow("OBSERVE".to_string()));
}
