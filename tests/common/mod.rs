#![allow(dead_code)]

use async_trait::async_trait;
use shop_agent::model::Plan;
use shop_agent::planner::{PlanSource, PlanSourceError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Plan source that returns a canned answer and records how it was called.
pub struct StubPlanSource {
    plan: Option<Plan>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubPlanSource {
    pub fn returning(plan: Plan) -> Arc<Self> {
        Arc::new(Self {
            plan: Some(plan),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Fails every call as an unconfigured Gemini source would.
    pub fn without_key() -> Arc<Self> {
        Arc::new(Self {
            plan: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanSource for StubPlanSource {
    async fn derive_plan(&self, user_text: &str) -> Result<Plan, PlanSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(user_text.to_string());
        self.plan.clone().ok_or(PlanSourceError::MissingApiKey)
    }
}
