//! Request payload for the `generateContent` endpoint.

use serde::Serialize;

/// Fixed instruction sent ahead of the user's text.
pub const PLAN_INSTRUCTIONS: &str = r#"
You are a shopping agent that works with a LOCAL product catalog only.
Respond ONLY with JSON, no explanations.

Example:
{
  "actions": [
    { "type": "searchProducts", "query": "laptop", "minRam": 12, "cpu": "i5" },
    { "type": "addToBasket", "productId": 2 },
    { "type": "showBasket" }
  ]
}
"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

impl<'a> GenerateRequest<'a> {
    /// A single user turn: the instructions, then the user's text verbatim.
    pub fn plan_request(user_text: &'a str, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part {
                        text: PLAN_INSTRUCTIONS,
                    },
                    Part { text: user_text },
                ],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}
