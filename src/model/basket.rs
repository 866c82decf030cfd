use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;

/// One stored basket line.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait
/// (see [`basket_actor`](crate::basket_actor)), so the whole basket is a
/// [`ResourceActor<BasketLine>`](crate::framework::ResourceActor) keyed by product id.
/// Quantity is always at least 1; removing a product deletes its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl BasketLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Upsert payload: how many units to add to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasketAdd {
    pub quantity: u32,
}

impl BasketAdd {
    pub fn one() -> Self {
        Self { quantity: 1 }
    }
}

/// A basket line resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketEntry {
    pub product: Product,
    pub quantity: u32,
}

/// Display projection of a basket line, as returned by `showBasket`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketItem {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<BasketEntry> for BasketItem {
    fn from(entry: BasketEntry) -> Self {
        Self {
            id: entry.product.id,
            name: entry.product.name,
            quantity: entry.quantity,
            price: entry.product.price,
        }
    }
}
