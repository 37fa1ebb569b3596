// crates/flow-generator-client/src/lib.rs
// ============================================================================
// Module: Flow Generator Client
// Description: Client adapter for the flow generation prediction service.
// Purpose: Turn a precondition phrase into a typed abstract test-flow outcome.
// Dependencies: reqwest, serde, serde_json, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! This crate wraps a single call to the flow generation service. A
//! precondition such as `Observe TextBox FirstName` is normalized into
//! lower-cased tokens, posted to `<service_base_url>/v1/predict`, and the
//! top-ranked candidate sequence is rendered as an upper-cased flow string.
//! Invariants:
//! - Each call issues exactly one request; there are no retries.
//! - The prediction URL is resolved once when [`FlowGeneratorClient`] is built.
//! - Service-level results are reported as [`FlowOutcome`]; transport and
//!   decoding faults are reported as [`FlowGeneratorError`].
//!
//! Security posture: the service is treated as an internal, pre-trusted
//! endpoint. TLS certificate verification is disabled unless
//! [`FlowGeneratorConfig::accept_invalid_certs`] is set to `false`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod outcome;
pub mod query;
pub mod response;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::FlowGenerator;
pub use client::FlowGeneratorClient;
pub use config::ConfigError;
pub use config::FlowGeneratorConfig;
pub use error::FlowGeneratorError;
pub use outcome::FailureReason;
pub use outcome::FlowOutcome;
pub use query::PredictRequest;
pub use query::normalize_query;
pub use response::PredictResponse;
pub use response::interpret_response;
