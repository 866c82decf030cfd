//! # Planner
//!
//! Turns free-form user text into a [`Plan`]. The [`PlanSource`] trait is the seam:
//! production uses [`GeminiPlanSource`], tests substitute their own.
//!
//! Model output is untrusted. [`sanitize`] repairs common wrapping (markdown fences,
//! leading prose) and [`parse`] reads the result leniently, falling back to
//! [`Plan::fallback`] whenever the output cannot be used.

pub mod error;
pub mod gemini;
pub mod parse;
pub mod prompt;
pub mod sanitize;

pub use error::PlanSourceError;
pub use gemini::{GeminiConfig, GeminiPlanSource};
pub use parse::{parse_plan, plan_from_envelope, plan_from_model_text, PlanParseFailure};

use crate::model::Plan;
use async_trait::async_trait;

/// Something that can derive a plan from user text.
#[async_trait]
pub trait PlanSource: Send + Sync {
    /// Returns a plan for `user_text`, which is passed through untrimmed.
    ///
    /// Unusable model output yields [`Plan::fallback`], not an error.
    async fn derive_plan(&self, user_text: &str) -> Result<Plan, PlanSourceError>;
}
