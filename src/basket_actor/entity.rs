//! ActorEntity implementation for [`BasketLine`].
//!
//! The basket context is the catalog. It is consulted only for logging: unknown
//! product ids are accepted at add time and dropped later, when the basket is
//! listed.

use super::error::BasketError;
use crate::catalog::ProductLookup;
use crate::framework::ActorEntity;
use crate::model::{BasketAdd, BasketLine, ProductId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
impl ActorEntity for BasketLine {
    type Id = ProductId;
    type Create = BasketAdd;
    type Context = Arc<dyn ProductLookup>;
    type Error = BasketError;

    fn from_create_params(id: ProductId, params: BasketAdd) -> Result<Self, Self::Error> {
        if params.quantity == 0 {
            return Err(BasketError::InvalidQuantity(0));
        }
        Ok(Self::new(id, params.quantity))
    }

    async fn on_create(&mut self, catalog: &Self::Context) -> Result<(), Self::Error> {
        if catalog.get_by_id(self.product_id).is_none() {
            debug!(product_id = %self.product_id, "Unknown product accepted into basket");
        }
        Ok(())
    }

    /// Adds the units to the existing line. Zero and overflowing additions are
    /// refused without touching the line.
    async fn on_merge(&mut self, params: BasketAdd, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if params.quantity == 0 {
            return Err(BasketError::InvalidQuantity(0));
        }
        self.quantity = self
            .quantity
            .checked_add(params.quantity)
            .ok_or(BasketError::QuantityOverflow {
                product_id: self.product_id,
                current: self.quantity,
                added: params.quantity,
            })?;
        Ok(())
    }
}
