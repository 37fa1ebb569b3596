// crates/flow-generator-client/src/client.rs
// ============================================================================
// Module: Flow Generator Client
// Description: Blocking adapter over the flow generation prediction endpoint.
// Purpose: Issue one prediction call per query and interpret the answer.
// Dependencies: reqwest, serde_json, tracing
// ============================================================================

//! ## Overview
//! [`FlowGeneratorClient`] posts the normalized precondition to
//! `<service_base_url>/v1/predict` and maps the response into a
//! [`FlowOutcome`]. The endpoint is resolved once at construction. Transport
//! faults and undecodable bodies surface as [`FlowGeneratorError`] and are
//! never folded into [`FlowOutcome::Failure`].
//!
//! Security posture: certificate verification follows
//! [`FlowGeneratorConfig::accept_invalid_certs`], which defaults to skipping
//! verification for the internal service.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use tracing::error;

use crate::config::FlowGeneratorConfig;
use crate::error::FlowGeneratorError;
use crate::outcome::FailureReason;
use crate::outcome::FlowOutcome;
use crate::query::PredictRequest;
use crate::response::SUCCESS_STATUS;
use crate::response::interpret_response;

// ============================================================================
// SECTION: Flow Generator Trait
// ============================================================================

/// Generates abstract test flows from precondition phrases.
pub trait FlowGenerator: Send + Sync {
    /// Generates a flow for the given precondition.
    ///
    /// # Errors
    ///
    /// Returns [`FlowGeneratorError`] when the call cannot be completed or the
    /// answer cannot be decoded.
    fn generate_flow(&self, query: &str) -> Result<FlowOutcome, FlowGeneratorError>;
}

// ============================================================================
// SECTION: Client Implementation
// ============================================================================

/// Blocking client for the flow generation service.
///
/// # Invariants
/// - `predict_url` is fixed for the client's lifetime.
/// - Each call sends exactly one request.
pub struct FlowGeneratorClient {
    /// Resolved prediction endpoint.
    predict_url: Url,
    /// Hard upper bound on response bodies.
    max_response_bytes: usize,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl FlowGeneratorClient {
    /// Creates a client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns [`FlowGeneratorError`] when the configuration is invalid or the
    /// HTTP client cannot be created.
    pub fn new(config: FlowGeneratorConfig) -> Result<Self, FlowGeneratorError> {
        config.validate()?;
        let predict_url = config.predict_url()?;
        let client = build_http_client(&config)?;
        Ok(Self {
            predict_url,
            max_response_bytes: config.max_response_bytes,
            client,
        })
    }

    /// Returns the resolved prediction endpoint.
    #[must_use]
    pub const fn predict_url(&self) -> &Url {
        &self.predict_url
    }

    /// Sends the prediction request and returns the raw response.
    fn send(&self, body: String) -> Result<Response, FlowGeneratorError> {
        self.client
            .post(self.predict_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|err| FlowGeneratorError::Transport(err.to_string()))
    }
}

impl FlowGenerator for FlowGeneratorClient {
    fn generate_flow(&self, query: &str) -> Result<FlowOutcome, FlowGeneratorError> {
        let request = PredictRequest::from_query(query);
        let payload = serde_json::to_string(&request)
            .map_err(|err| FlowGeneratorError::Encode(err.to_string()))?;
        debug!(url = %self.predict_url, payload = %payload, "running flow generator");

        let outcome = {
            let mut response = self.send(payload)?;
            let status = response.status().as_u16();
            if status == SUCCESS_STATUS {
                let body = read_response_limited(&mut response, self.max_response_bytes)?;
                debug!(url = %self.predict_url, "flow generator call succeeded");
                interpret_response(status, &body)?
            } else {
                interpret_response(status, &[])?
            }
        };

        match &outcome {
            FlowOutcome::Flow(flow) => debug!(flow = %flow, "generated flow"),
            FlowOutcome::NoCandidate => debug!("flow generator returned no candidates"),
            FlowOutcome::Failure(FailureReason::ServiceStatus(status)) => {
                error!(status = *status, "unable to run flow generator");
            }
            FlowOutcome::Failure(FailureReason::MalformedCandidate) => {
                error!("flow generator returned a malformed candidate");
            }
        }
        Ok(outcome)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the HTTP client according to the configured trust settings.
fn build_http_client(config: &FlowGeneratorConfig) -> Result<Client, FlowGeneratorError> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
        .map_err(|err| FlowGeneratorError::ClientBuild(err.to_string()))
}

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(
    response: &mut Response,
    max_bytes: usize,
) -> Result<Vec<u8>, FlowGeneratorError> {
    let max_bytes_u64 = u64::try_from(max_bytes).map_err(|_| FlowGeneratorError::ResponseTooLarge {
        limit: max_bytes,
    })?;
    if let Some(expected) = response.content_length()
        && expected > max_bytes_u64
    {
        return Err(FlowGeneratorError::ResponseTooLarge {
            limit: max_bytes,
        });
    }
    let mut buf = Vec::new();
    let mut handle = response.take(max_bytes_u64.saturating_add(1));
    handle
        .read_to_end(&mut buf)
        .map_err(|err| FlowGeneratorError::Transport(format!("failed to read response: {err}")))?;
    if buf.len() > max_bytes {
        return Err(FlowGeneratorError::ResponseTooLarge {
            limit: max_bytes,
        });
    }
    Ok(buf)
}
