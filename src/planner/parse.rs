//! Lenient conversion of model output into a [`Plan`].
//!
//! Parsing is split in two so the fallback policy is visible in the types:
//! [`parse_plan`] answers "is this a plan, and if not, why not?" and never
//! substitutes anything, while [`plan_from_model_text`] and
//! [`plan_from_envelope`] apply the policy that any failure, or a plan with no
//! actions, becomes [`Plan::fallback`].
//!
//! Leniency rules:
//! - object keys (`actions`, `type`, `query`, `minRam`, `cpu`, `productId`) match
//!   case-insensitively;
//! - a missing, `null` or wrongly-typed field inside an action is treated as absent;
//! - a missing `type` yields an unrecognized action with an empty tag;
//! - the top level must be an object whose `actions` is an array of objects.

use super::sanitize::sanitize_model_text;
use crate::model::{Action, Plan, ProductId};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Where the model's text sits inside a `generateContent` response.
pub const MODEL_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Why model output could not be turned into a plan. Recovered locally.
#[derive(Debug, Error)]
pub enum PlanParseFailure {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level value is not an object")]
    NotAnObject,
    #[error("no actions field")]
    MissingActions,
    #[error("actions is not an array")]
    ActionsNotArray,
    #[error("action {0} is not an object")]
    ActionNotObject(usize),
    #[error("response envelope has no text at {0}")]
    MissingModelText(&'static str),
}

/// Sanitizes and parses model text. A well-formed plan with zero actions is a
/// success.
pub fn parse_plan(model_text: &str) -> Result<Plan, PlanParseFailure> {
    let cleaned = sanitize_model_text(model_text);
    debug!(%cleaned, "Sanitized model output");

    let root: Value = serde_json::from_str(&cleaned)?;
    let root = root.as_object().ok_or(PlanParseFailure::NotAnObject)?;
    let actions = field(root, "actions")
        .ok_or(PlanParseFailure::MissingActions)?
        .as_array()
        .ok_or(PlanParseFailure::ActionsNotArray)?;

    let actions = actions
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            value
                .as_object()
                .map(parse_action)
                .ok_or(PlanParseFailure::ActionNotObject(idx))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Plan::new(actions))
}

/// Pulls the model's text out of a raw `generateContent` response body.
pub fn extract_model_text(envelope: &str) -> Result<String, PlanParseFailure> {
    let root: Value = serde_json::from_str(envelope)?;
    root.pointer(MODEL_TEXT_POINTER)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(PlanParseFailure::MissingModelText(MODEL_TEXT_POINTER))
}

/// Parses model text, substituting the fallback plan on failure or when the model
/// returned no actions.
pub fn plan_from_model_text(model_text: &str) -> Plan {
    match parse_plan(model_text) {
        Ok(plan) if !plan.is_empty() => plan,
        Ok(_) => {
            warn!("Model returned no actions, using fallback plan");
            Plan::fallback()
        }
        Err(reason) => {
            warn!(%reason, "Could not parse model output, using fallback plan");
            Plan::fallback()
        }
    }
}

/// [`plan_from_model_text`] applied to a full response body. A body without model
/// text also yields the fallback plan.
pub fn plan_from_envelope(envelope: &str) -> Plan {
    match extract_model_text(envelope) {
        Ok(text) => {
            debug!(%text, "Model output");
            plan_from_model_text(&text)
        }
        Err(reason) => {
            warn!(%reason, "Could not read model response, using fallback plan");
            Plan::fallback()
        }
    }
}

fn parse_action(object: &Map<String, Value>) -> Action {
    let tag = field(object, "type").and_then(Value::as_str).unwrap_or_default();
    let mut action = Action::from_tag(tag);
    match &mut action {
        Action::SearchProducts(search) => {
            search.query = string_field(object, "query");
            search.min_ram = integer_field(object, "minRam").map(saturate_ram);
            search.cpu = string_field(object, "cpu");
        }
        Action::AddToBasket { product_id } => {
            *product_id = integer_field(object, "productId").map(ProductId::from);
        }
        Action::ShowBasket | Action::Error | Action::Unrecognized(_) => {}
    }
    action
}

/// Out-of-range RAM thresholds clamp rather than vanish, so the filter never widens:
/// negatives match everything, anything above `u32::MAX` matches nothing.
fn saturate_ram(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(if value < 0 { 0 } else { u32::MAX })
}

fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
        .filter(|value| !value.is_null())
}

fn string_field(object: &Map<String, Value>, name: &str) -> Option<String> {
    field(object, name)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Integers, or floats with no fractional part.
fn integer_field(object: &Map<String, Value>, name: &str) -> Option<i64> {
    let value = field(object, name)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchQuery;
    use serde_json::json;

    #[test]
    fn test_parses_documented_actions() {
        let plan = parse_plan(
            r#"{"actions":[
                {"type":"searchProducts","query":"laptop","minRam":12,"cpu":"i5"},
                {"type":"addToBasket","productId":2},
                {"type":"showBasket"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            plan.actions,
            vec![
                Action::SearchProducts(SearchQuery {
                    query: Some("laptop".into()),
                    min_ram: Some(12),
                    cpu: Some("i5".into()),
                }),
                Action::AddToBasket {
                    product_id: Some(ProductId(2))
                },
                Action::ShowBasket,
            ]
        );
    }

    #[test]
    fn test_field_names_are_case_insensitive() {
        let plan = parse_plan(r#"{"Actions":[{"Type":"addToBasket","ProductID":4},{"TYPE":"searchProducts","MinRam":16}]}"#)
            .unwrap();
        assert_eq!(
            plan.actions[0],
            Action::AddToBasket {
                product_id: Some(ProductId(4))
            }
        );
        assert_eq!(
            plan.actions[1],
            Action::SearchProducts(SearchQuery {
                min_ram: Some(16),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_bad_sub_fields_become_absent() {
        let plan = parse_plan(
            r#"{"actions":[
                {"type":"searchProducts","query":7,"minRam":"lots","cpu":null,"color":"red"},
                {"type":"addToBasket","productId":"two"},
                {"type":"addToBasket","productId":3.0},
                {"query":"orphan"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(plan.actions[0], Action::SearchProducts(SearchQuery::default()));
        assert_eq!(plan.actions[1], Action::AddToBasket { product_id: None });
        assert_eq!(
            plan.actions[2],
            Action::AddToBasket {
                product_id: Some(ProductId(3))
            }
        );
        assert_eq!(plan.actions[3], Action::Unrecognized(String::new()));
    }

    #[test]
    fn test_min_ram_outside_u32_saturates() {
        let plan = parse_plan(
            r#"{"actions":[
                {"type":"searchProducts","minRam":5000000000},
                {"type":"searchProducts","minRam":-4}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            plan.actions,
            vec![
                Action::SearchProducts(SearchQuery {
                    min_ram: Some(u32::MAX),
                    ..Default::default()
                }),
                Action::SearchProducts(SearchQuery {
                    min_ram: Some(0),
                    ..Default::default()
                }),
            ]
        );
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let plan = parse_plan(r#"{"actions":[{"type":"checkout","productId":1}]}"#).unwrap();
        assert_eq!(plan.actions, vec![Action::Unrecognized("checkout".into())]);
    }

    #[test]
    fn test_fenced_empty_plan_parses_to_zero_actions() {
        let plan = parse_plan("```json\n{\"actions\":[]}\n```").unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_structural_failures() {
        assert!(matches!(parse_plan("I cannot help with that."), Err(PlanParseFailure::Json(_))));
        assert!(matches!(parse_plan("[1, 2]"), Err(PlanParseFailure::NotAnObject)));
        assert!(matches!(parse_plan("{\"steps\":[]}"), Err(PlanParseFailure::MissingActions)));
        assert!(matches!(parse_plan("{\"actions\":{}}"), Err(PlanParseFailure::ActionsNotArray)));
        assert!(matches!(
            parse_plan("{\"actions\":[{\"type\":\"showBasket\"}, \"showBasket\"]}"),
            Err(PlanParseFailure::ActionNotObject(1))
        ));
    }

    #[test]
    fn test_fallback_policy() {
        assert_eq!(plan_from_model_text("plain prose, no braces"), Plan::fallback());
        assert_eq!(plan_from_model_text("{\"actions\":[]}"), Plan::fallback());
        assert_eq!(
            plan_from_model_text("Here you go: {\"actions\":[{\"type\":\"showBasket\"}]}"),
            Plan::new(vec![Action::ShowBasket])
        );
    }

    #[test]
    fn test_envelope_extraction() {
        let envelope = json!({
            "candidates": [{
                "content": {"parts": [{"text": "```json\n{\"actions\":[{\"type\":\"showBasket\"}]}\n```"}]}
            }]
        })
        .to_string();
        assert_eq!(plan_from_envelope(&envelope), Plan::new(vec![Action::ShowBasket]));

        let no_parts = json!({"candidates": [{"content": {"parts": []}}]}).to_string();
        assert!(matches!(
            extract_model_text(&no_parts),
            Err(PlanParseFailure::MissingModelText(MODEL_TEXT_POINTER))
        ));
        assert_eq!(plan_from_envelope(&no_parts), Plan::fallback());
        assert_eq!(plan_from_envelope("<html>bad gateway</html>"), Plan::fallback());
    }
}
