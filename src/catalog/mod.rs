//! # Product Catalog
//!
//! A fixed, in-memory product set behind the [`ProductLookup`] trait. The basket and
//! the executor only see the trait, so the store can be swapped for any lookup
//! service.
//!
//! Search filters are conjunctive and never fail; results keep catalog order.

use crate::model::{Product, ProductId, SearchQuery};
use rust_decimal::Decimal;
use tracing::debug;

/// Read-only access to the products on sale.
pub trait ProductLookup: Send + Sync {
    /// Products matching every present filter, in catalog order.
    fn search(&self, query: Option<&str>, min_ram: Option<u32>, cpu: Option<&str>) -> Vec<Product>;

    fn get_by_id(&self, id: ProductId) -> Option<Product>;

    fn get_all(&self) -> Vec<Product>;

    /// Convenience over [`ProductLookup::search`] for a plan's search step.
    fn search_by(&self, search: &SearchQuery) -> Vec<Product> {
        self.search(search.query.as_deref(), search.min_ram, search.cpu.as_deref())
    }
}

/// Vector-backed catalog. Insertion order is the listing order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo laptop range the agent sells.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "Laptop HP 15", "HP", "Core i5", 8, Decimal::from(2500)),
            Product::new(2, "Laptop Lenovo IdeaPad", "Lenovo", "Core i5", 12, Decimal::from(2800)),
            Product::new(3, "Laptop Dell Inspiron", "Dell", "Core i7", 16, Decimal::from(3500)),
            Product::new(4, "Laptop Asus VivoBook", "Asus", "Core i5", 12, Decimal::from(3000)),
        ])
    }
}

impl ProductLookup for Catalog {
    fn search(&self, query: Option<&str>, min_ram: Option<u32>, cpu: Option<&str>) -> Vec<Product> {
        // Blank text filters are treated as absent.
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        let cpu = cpu.filter(|c| !c.is_empty()).map(str::to_lowercase);

        let products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                query.as_deref().map_or(true, |q| {
                    p.name.to_lowercase().contains(q)
                        || p.brand.to_lowercase().contains(q)
                        || p.cpu.to_lowercase().contains(q)
                })
            })
            .filter(|p| min_ram.map_or(true, |ram| p.ram_gb >= ram))
            .filter(|p| {
                cpu.as_deref()
                    .map_or(true, |c| p.cpu.to_lowercase().contains(c))
            })
            .cloned()
            .collect();

        debug!(?query, ?min_ram, ?cpu, matches = products.len(), "Catalog search");
        products
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn get_all(&self) -> Vec<Product> {
        self.products.clone()
    }
}
