// crates/flow-generator-client/src/outcome.rs
// ============================================================================
// Module: Flow Outcome
// Description: Typed result of a single flow generation call.
// Purpose: Distinguish generated flows, empty results, and service failures.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A call either yields a flow, yields nothing, or fails at the service level.
//! Failures carry a [`FailureReason`] so a non-success status and a malformed
//! candidate stay distinguishable.

// ============================================================================
// SECTION: Outcome Types
// ============================================================================

/// Interpreted outcome of one flow generation call.
///
/// # Invariants
/// - `Flow` text is upper-cased and single-space separated.
/// - `NoCandidate` is only produced for a success status with no candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Abstract test flow rendered from the top-ranked candidate.
    Flow(String),
    /// The service answered successfully but returned no candidates.
    NoCandidate,
    /// The service did not produce a usable flow.
    Failure(FailureReason),
}

/// Reason attached to [`FlowOutcome::Failure`].
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The service returned a status other than 200.
    ServiceStatus(u16),
    /// The top-ranked candidate could not be rendered as flow text.
    MalformedCandidate,
}

impl FlowOutcome {
    /// Returns the flow text when a flow was generated.
    #[must_use]
    pub fn flow(&self) -> Option<&str> {
        match self {
            Self::Flow(text) => Some(text.as_str()),
            Self::NoCandidate | Self::Failure(_) => None,
        }
    }

    /// Returns true when the outcome is a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
