//! # Basket Actor
//!
//! The process-wide basket: one [`ResourceActor<BasketLine>`] keyed by product id.
//! Every request of every caller goes through the same actor, so additions made by
//! one caller are visible to all others. Each message is applied atomically, but
//! nothing groups several messages into a transaction.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`BasketLine`]
//! - [`error`] - [`BasketError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, generic_client) = basket_actor::new();
//! let basket = BasketClient::new(generic_client, catalog.clone());
//! tokio::spawn(actor.run(catalog));
//!
//! basket.add(ProductId(2), 1).await?;
//! let lines = basket.list().await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::BasketLine;

/// Creates a new Basket actor and its client.
pub fn new() -> (ResourceActor<BasketLine>, ResourceClient<BasketLine>) {
    ResourceActor::new(32)
}
