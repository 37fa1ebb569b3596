// crates/flow-generator-client/src/error.rs
// ============================================================================
// Module: Flow Generator Errors
// Description: Call-level faults raised by the flow generator client.
// Purpose: Keep transport and decoding faults separate from service outcomes.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Errors here are faults the client cannot interpret as a service answer:
//! the request never completed, or the response body could not be decoded.
//! Service-level failures are reported through
//! [`crate::FlowOutcome::Failure`] instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::config::ConfigError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors emitted by the flow generator client.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum FlowGeneratorError {
    /// Client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),
    /// The request payload could not be encoded.
    ///
    /// A token array always serializes; this keeps the encode step free of
    /// `expect`.
    #[error("flow generator request encoding failed: {0}")]
    Encode(String),
    /// The request could not be sent or the body could not be read.
    #[error("flow generator transport failed: {0}")]
    Transport(String),
    /// The response body exceeded the configured size limit.
    #[error("flow generator response exceeds size limit of {limit} bytes")]
    ResponseTooLarge {
        /// Configured limit in bytes.
        limit: usize,
    },
    /// The response body is not a valid prediction response.
    #[error("invalid flow generator response: {0}")]
    InvalidResponse(String),
}
