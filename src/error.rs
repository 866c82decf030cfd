//! Errors that cross the agent boundary.

use crate::basket_actor::BasketError;
use crate::planner::PlanSourceError;
use thiserror::Error;

/// Failure of one agent run.
///
/// `InvalidInput` and `InvalidBody` are the caller's fault; everything else is
/// internal. The HTTP mapping lives in [`server`](crate::server).
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Prompt is required.")]
    InvalidInput,

    /// The request body was not a JSON object with a string `prompt`.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    PlanSource(#[from] PlanSourceError),

    #[error("Basket failure: {0}")]
    Basket(#[from] BasketError),
}
