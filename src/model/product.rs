use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Any integer is a valid id: the basket accepts ids the catalog does not know and
/// only drops them when listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A catalog entry. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub cpu: String,
    pub ram_gb: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub shop: String,
}

impl Product {
    /// Shop label used when none is given.
    pub const DEFAULT_SHOP: &'static str = "emag";

    /// Creates a product sold by [`Product::DEFAULT_SHOP`].
    ///
    /// # Arguments
    /// * `id` - Stable catalog identifier
    /// * `name` - Display name
    /// * `brand` - Manufacturer
    /// * `cpu` - CPU descriptor, e.g. "Core i5"
    /// * `ram_gb` - Installed memory in gigabytes
    /// * `price` - Non-negative unit price
    pub fn new(
        id: i64,
        name: impl Into<String>,
        brand: impl Into<String>,
        cpu: impl Into<String>,
        ram_gb: u32,
        price: Decimal,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            brand: brand.into(),
            cpu: cpu.into(),
            ram_gb,
            price,
            shop: Self::DEFAULT_SHOP.to_string(),
        }
    }
}
