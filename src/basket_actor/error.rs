//! Error types for the Basket actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during basket operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BasketError {
    /// Lines hold at least one unit, so adding zero is refused.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Quantity overflow for {product_id}: {current} + {added}")]
    QuantityOverflow {
        product_id: ProductId,
        current: u32,
        added: u32,
    },

    #[error("Not in basket: {0}")]
    NotInBasket(ProductId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
