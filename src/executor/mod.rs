//! # Plan Executor
//!
//! Runs a [`Plan`] against the catalog and the basket, one action at a time and in
//! order, so a `showBasket` step sees any `addToBasket` steps before it.
//!
//! | Action | Effect | Result |
//! |---|---|---|
//! | `searchProducts` | catalog search | always, possibly with no products |
//! | `addToBasket` with id | adds one unit | the id |
//! | `addToBasket` without id | none | none |
//! | `showBasket` | reads the basket | resolved lines |
//! | `error`, unrecognized | none | none |

use crate::basket_actor::BasketError;
use crate::catalog::ProductLookup;
use crate::clients::BasketClient;
use crate::model::{Action, BasketItem, Plan, ToolResult};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct PlanExecutor {
    catalog: Arc<dyn ProductLookup>,
    basket: BasketClient,
}

impl PlanExecutor {
    pub fn new(catalog: Arc<dyn ProductLookup>, basket: BasketClient) -> Self {
        Self { catalog, basket }
    }

    pub fn basket(&self) -> &BasketClient {
        &self.basket
    }

    /// Executes every action. Stops at the first basket failure; earlier additions
    /// stay in the basket.
    #[instrument(skip_all, fields(actions = plan.actions.len()))]
    pub async fn execute(&self, plan: &Plan) -> Result<Vec<ToolResult>, BasketError> {
        let mut results = Vec::with_capacity(plan.actions.len());
        for action in &plan.actions {
            if let Some(result) = self.execute_action(action).await? {
                results.push(result);
            }
        }
        debug!(results = results.len(), "Plan executed");
        Ok(results)
    }

    async fn execute_action(&self, action: &Action) -> Result<Option<ToolResult>, BasketError> {
        match action {
            Action::SearchProducts(search) => Ok(Some(ToolResult::Search {
                products: self.catalog.search_by(search),
            })),
            Action::AddToBasket {
                product_id: Some(product_id),
            } => {
                self.basket.add(*product_id, 1).await?;
                Ok(Some(ToolResult::Add {
                    product_id: *product_id,
                }))
            }
            Action::AddToBasket { product_id: None } => {
                debug!("Skipping addToBasket without a product id");
                Ok(None)
            }
            Action::ShowBasket => {
                let basket = self
                    .basket
                    .list()
                    .await?
                    .into_iter()
                    .map(BasketItem::from)
                    .collect();
                Ok(Some(ToolResult::Basket { basket }))
            }
            Action::Error | Action::Unrecognized(_) => {
                debug!(tag = action.tag(), "Skipping action");
                Ok(None)
            }
        }
    }
}
