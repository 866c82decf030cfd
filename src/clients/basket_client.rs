//! # Basket Client
//!
//! Domain API over the basket actor. Writes go straight to the actor; reads are
//! resolved against the catalog so callers get products rather than bare ids.
use crate::basket_actor::BasketError;
use crate::catalog::ProductLookup;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{BasketAdd, BasketEntry, BasketLine, ProductId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the Basket actor.
#[derive(Clone)]
pub struct BasketClient {
    inner: ResourceClient<BasketLine>,
    catalog: Arc<dyn ProductLookup>,
}

impl BasketClient {
    pub fn new(inner: ResourceClient<BasketLine>, catalog: Arc<dyn ProductLookup>) -> Self {
        Self { inner, catalog }
    }

    /// Adds `quantity` units of a product, creating the line if needed.
    ///
    /// Any product id is accepted; ids the catalog does not know are dropped by
    /// [`BasketClient::list`].
    #[instrument(skip(self, product_id), fields(product_id = %product_id))]
    pub async fn add(&self, product_id: ProductId, quantity: u32) -> Result<BasketLine, BasketError> {
        debug!("Sending request");
        self.inner
            .upsert(product_id, BasketAdd { quantity })
            .await
            .map_err(Self::map_error)
    }

    /// Lines resolved through the catalog, in the order they were first added.
    /// Lines whose product cannot be resolved are skipped.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<BasketEntry>, BasketError> {
        let lines = self.list_raw().await?;
        let stored = lines.len();
        let entries: Vec<BasketEntry> = lines
            .into_iter()
            .filter_map(|line| {
                self.catalog
                    .get_by_id(line.product_id)
                    .map(|product| BasketEntry {
                        product,
                        quantity: line.quantity,
                    })
            })
            .collect();
        debug!(stored, resolved = entries.len(), "Basket listed");
        Ok(entries)
    }

    /// Deletes the line for a product.
    #[instrument(skip(self, product_id), fields(product_id = %product_id))]
    pub async fn remove(&self, product_id: ProductId) -> Result<(), BasketError> {
        debug!("Sending request");
        self.inner.delete(product_id).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => BasketError::NotInBasket(product_id),
            other => Self::map_error(other),
        })
    }

    /// Empties the basket, returning how many lines were removed.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, BasketError> {
        debug!("Sending request");
        self.inner.clear().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<BasketLine> for BasketClient {
    type Error = BasketError;

    fn inner(&self) -> &ResourceClient<BasketLine> {
        &self.inner
    }

    /// Entity errors raised by the basket come back as themselves; anything else is
    /// a communication failure.
    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<BasketError>()
            .unwrap_or_else(|other| BasketError::ActorCommunicationError(other.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::framework::mock::{create_mock_client, expect_list, expect_upsert, MockClient};

    fn catalog() -> Arc<dyn ProductLookup> {
        Arc::new(Catalog::seeded())
    }

    #[tokio::test]
    async fn test_add_sends_upsert_with_quantity() {
        let (client, mut receiver) = create_mock_client::<BasketLine>(10);
        let basket = BasketClient::new(client, catalog());

        let add_task = tokio::spawn(async move { basket.add(ProductId(2), 3).await });

        let (id, params, responder) = expect_upsert(&mut receiver)
            .await
            .expect("Expected Upsert request");
        assert_eq!(id, ProductId(2));
        assert_eq!(params.quantity, 3);
        responder.send(Ok(BasketLine::new(ProductId(2), 3))).unwrap();

        let line = add_task.await.unwrap().unwrap();
        assert_eq!(line.quantity, 3);
    }

    #[tokio::test]
    async fn test_list_drops_lines_the_catalog_cannot_resolve() {
        let (client, mut receiver) = create_mock_client::<BasketLine>(10);
        let basket = BasketClient::new(client, catalog());

        let list_task = tokio::spawn(async move { basket.list().await });

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        responder
            .send(Ok(vec![
                BasketLine::new(ProductId(42), 1),
                BasketLine::new(ProductId(3), 2),
            ]))
            .unwrap();

        let entries = list_task.await.unwrap().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].product.id, ProductId(3));
        assert_eq!(entries[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered() {
        let mut mock = MockClient::<BasketLine>::new();
        mock.expect_upsert(ProductId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                BasketError::InvalidQuantity(0),
            )));
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        mock.expect_delete(ProductId(5))
            .return_err(FrameworkError::NotFound("product_5".into()));

        let basket = BasketClient::new(mock.client(), catalog());

        assert_eq!(
            basket.add(ProductId(1), 0).await,
            Err(BasketError::InvalidQuantity(0))
        );
        assert!(matches!(
            basket.list().await,
            Err(BasketError::ActorCommunicationError(msg)) if msg.contains("Actor closed")
        ));
        assert_eq!(
            basket.remove(ProductId(5)).await,
            Err(BasketError::NotInBasket(ProductId(5)))
        );

        mock.verify();
    }
}
