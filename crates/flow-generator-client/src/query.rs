// crates/flow-generator-client/src/query.rs
// ============================================================================
// Module: Precondition Query
// Description: Normalization of precondition phrases into request payloads.
// Purpose: Produce the token array expected by the prediction endpoint.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Preconditions are split on single spaces and lower-cased. Runs of spaces
//! produce empty tokens and an empty query produces one empty token; the
//! service receives exactly what the split yields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

// ============================================================================
// SECTION: Request Payload
// ============================================================================

/// Prediction request body: an ordered array of lower-cased tokens.
///
/// # Invariants
/// - Token order matches the order in the source query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredictRequest {
    /// Lower-cased query tokens.
    tokens: Vec<String>,
}

impl PredictRequest {
    /// Builds a request from a raw precondition query.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self {
            tokens: normalize_query(query),
        }
    }

    /// Returns the normalized tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Splits a query on single spaces and lower-cases each token.
#[must_use]
pub fn normalize_query(query: &str) -> Vec<String> {
    query.split(' ').map(str::to_lowercase).collect()
}
