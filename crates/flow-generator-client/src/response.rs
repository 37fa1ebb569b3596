// crates/flow-generator-client/src/response.rs
// ============================================================================
// Module: Prediction Response
// Description: Decoding and interpretation of prediction responses.
// Purpose: Map status and body into a typed flow outcome.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The service answers with `{ "sequences": [[token, ...], ...] }`, ranked
//! best-first. Only the first candidate is used; its position is trusted as
//! its rank. Candidates are kept as raw JSON until selected so a malformed
//! top candidate maps to [`FailureReason::MalformedCandidate`] rather than a
//! decode fault.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

use crate::error::FlowGeneratorError;
use crate::outcome::FailureReason;
use crate::outcome::FlowOutcome;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// The only status treated as success.
pub const SUCCESS_STATUS: u16 = 200;

// ============================================================================
// SECTION: Response Payload
// ============================================================================

/// Prediction response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    /// Candidate sequences, best-first.
    pub sequences: Vec<Value>,
}

impl PredictResponse {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns [`FlowGeneratorError::InvalidResponse`] when the body is not
    /// JSON or has no `sequences` array.
    pub fn from_slice(body: &[u8]) -> Result<Self, FlowGeneratorError> {
        serde_json::from_slice(body)
            .map_err(|err| FlowGeneratorError::InvalidResponse(err.to_string()))
    }

    /// Renders the top-ranked candidate into an outcome.
    #[must_use]
    pub fn into_outcome(self) -> FlowOutcome {
        let Some(candidate) = self.sequences.first() else {
            return FlowOutcome::NoCandidate;
        };
        candidate_text(candidate).map_or(
            FlowOutcome::Failure(FailureReason::MalformedCandidate),
            FlowOutcome::Flow,
        )
    }
}

// ============================================================================
// SECTION: Interpretation
// ============================================================================

/// Interprets a status code and body into a flow outcome.
///
/// Any status other than 200 yields a failure without inspecting the body.
///
/// # Errors
///
/// Returns [`FlowGeneratorError::InvalidResponse`] when a success body cannot
/// be decoded.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<FlowOutcome, FlowGeneratorError> {
    if status != SUCCESS_STATUS {
        return Ok(FlowOutcome::Failure(FailureReason::ServiceStatus(status)));
    }
    Ok(PredictResponse::from_slice(body)?.into_outcome())
}

/// Joins a candidate's tokens with single spaces and upper-cases the result.
///
/// Returns `None` unless the candidate is an array of strings.
pub(crate) fn candidate_text(candidate: &Value) -> Option<String> {
    let Value::Array(tokens) = candidate else {
        return None;
    };
    let tokens = tokens.iter().map(Value::as_str).collect::<Option<Vec<&str>>>()?;
    Some(tokens.join(" ").to_uppercase())
}
