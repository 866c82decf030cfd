use crate::model::{BasketItem, Plan, Product, ProductId};
use serde::Serialize;

/// The outcome of one executed action, tagged by the tool that produced it.
///
/// Only recognized actions produce a result, so a result list can be shorter than
/// the plan it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tool")]
pub enum ToolResult {
    #[serde(rename = "searchProducts")]
    Search { products: Vec<Product> },
    #[serde(rename = "addToBasket", rename_all = "camelCase")]
    Add { product_id: ProductId },
    #[serde(rename = "showBasket")]
    Basket { basket: Vec<BasketItem> },
}

/// Body of a successful `POST /api/agent/run`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentResponse {
    pub plan: Plan,
    pub results: Vec<ToolResult>,
}
