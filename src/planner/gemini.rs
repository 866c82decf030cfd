//! Plan source backed by Google's Gemini `generateContent` endpoint.

use super::error::PlanSourceError;
use super::parse::plan_from_envelope;
use super::prompt::GenerateRequest;
use super::PlanSource;
use crate::model::Plan;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Connection settings for [`GeminiPlanSource`].
#[derive(Clone)]
pub struct GeminiConfig {
    /// Checked on every call; a missing or empty key fails the call, not startup.
    pub api_key: Option<String>,
    pub model: String,
    /// API root, without the `/models/...` suffix.
    pub base_url: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1";
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            temperature: Self::DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(30),
        }
    }
}

// The key never reaches a log line.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Asks Gemini for a plan. Every call is an independent request; no conversation
/// state is kept.
#[derive(Debug, Clone)]
pub struct GeminiPlanSource {
    config: GeminiConfig,
    client: Client,
}

impl GeminiPlanSource {
    pub fn new(config: GeminiConfig) -> Result<Self, PlanSourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PlanSourceError::Http(e.without_url()))?;
        info!(model = %config.model, base_url = %config.base_url, "Gemini plan source ready");
        Ok(Self { config, client })
    }
}

#[async_trait]
impl PlanSource for GeminiPlanSource {
    #[instrument(skip(self, user_text), fields(model = %self.config.model))]
    async fn derive_plan(&self, user_text: &str) -> Result<Plan, PlanSourceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(PlanSourceError::MissingApiKey)?;

        let endpoint = self.config.endpoint();
        debug!(%endpoint, "Requesting plan");

        // Request errors carry the URL, and the URL carries the key.
        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", api_key)])
            .json(&GenerateRequest::plan_request(user_text, self.config.temperature))
            .send()
            .await
            .map_err(|e| PlanSourceError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlanSourceError::Http(e.without_url()))?;
        debug!(status = status.as_u16(), %body, "Raw model response");

        if !status.is_success() {
            error!(status = status.as_u16(), "Model endpoint rejected the request");
            return Err(PlanSourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let plan = plan_from_envelope(&body);
        info!(actions = plan.actions.len(), "Plan derived");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_model() {
        let config = GeminiConfig::default().with_base_url("http://localhost:9000/v1/");
        assert_eq!(
            config.endpoint(),
            "http://localhost:9000/v1/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::default().with_api_key("secret-key");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("***"));
    }

    #[tokio::test]
    async fn test_missing_or_empty_key_fails_before_any_request() {
        // Port 9 is discard; a request would fail with Http, not MissingApiKey.
        let base = GeminiConfig::default().with_base_url("http://127.0.0.1:9/v1");

        let source = GeminiPlanSource::new(base.clone()).unwrap();
        assert!(matches!(
            source.derive_plan("laptop").await,
            Err(PlanSourceError::MissingApiKey)
        ));

        let source = GeminiPlanSource::new(base.with_api_key("")).unwrap();
        assert!(matches!(
            source.derive_plan("laptop").await,
            Err(PlanSourceError::MissingApiKey)
        ));
    }
}
