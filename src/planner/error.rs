//! Error types for plan sources.

use thiserror::Error;

/// Why a plan source could not produce a plan.
///
/// Unusable model output is not an error: it becomes the fallback plan. These are
/// the failures that reach the caller.
#[derive(Debug, Error)]
pub enum PlanSourceError {
    #[error("Gemini API key is not configured.")]
    MissingApiKey,

    /// The model endpoint answered with a non-success status.
    #[error("Model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Model request failed: {0}")]
    Http(#[from] reqwest::Error),
}
