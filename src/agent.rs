//! # Shopping Agent
//!
//! The request boundary: validate the prompt, ask the plan source for a plan,
//! execute it, and return the plan together with what each step produced.

use crate::error::AgentError;
use crate::executor::PlanExecutor;
use crate::model::AgentResponse;
use crate::planner::PlanSource;
use std::sync::Arc;
use tracing::{error, info, instrument};

#[derive(Clone)]
pub struct ShoppingAgent {
    plan_source: Arc<dyn PlanSource>,
    executor: PlanExecutor,
}

impl ShoppingAgent {
    pub fn new(plan_source: Arc<dyn PlanSource>, executor: PlanExecutor) -> Self {
        Self {
            plan_source,
            executor,
        }
    }

    /// Runs one prompt end to end.
    ///
    /// A blank prompt is rejected before the plan source is consulted. Otherwise the
    /// prompt is forwarded untrimmed.
    #[instrument(skip_all)]
    pub async fn run(&self, prompt: &str) -> Result<AgentResponse, AgentError> {
        if prompt.trim().is_empty() {
            info!("Rejected blank prompt");
            return Err(AgentError::InvalidInput);
        }

        let plan = self.plan_source.derive_plan(prompt).await.map_err(|e| {
            error!(error = %e, "Plan source failed");
            AgentError::from(e)
        })?;

        let results = self.executor.execute(&plan).await.map_err(|e| {
            error!(error = %e, "Plan execution failed");
            AgentError::from(e)
        })?;

        info!(
            actions = plan.actions.len(),
            results = results.len(),
            "Agent run complete"
        );
        Ok(AgentResponse { plan, results })
    }
}
