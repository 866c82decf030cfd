use shop_agent::basket_actor::{self, BasketError};
use shop_agent::catalog::{Catalog, ProductLookup};
use shop_agent::clients::BasketClient;
use shop_agent::model::ProductId;
use std::sync::Arc;

fn start_basket() -> (BasketClient, tokio::task::JoinHandle<()>) {
    let catalog: Arc<dyn ProductLookup> = Arc::new(Catalog::seeded());
    let (actor, client) = basket_actor::new();
    let handle = tokio::spawn(actor.run(catalog.clone()));
    (BasketClient::new(client, catalog), handle)
}

#[tokio::test]
async fn test_repeated_adds_accumulate_on_one_line() {
    let (basket, _handle) = start_basket();

    basket.add(ProductId(2), 1).await.expect("first add");
    let line = basket.add(ProductId(2), 1).await.expect("second add");
    assert_eq!(line.quantity, 2);

    let entries = basket.list().await.expect("list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].product.id, ProductId(2));
    assert_eq!(entries[0].quantity, 2);
}

#[tokio::test]
async fn test_lines_keep_first_added_order() {
    let (basket, _handle) = start_basket();

    for id in [3, 1, 3, 4] {
        basket.add(ProductId(id), 1).await.unwrap();
    }

    let listed: Vec<(i64, u32)> = basket
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| (e.product.id.0, e.quantity))
        .collect();
    assert_eq!(listed, vec![(3, 2), (1, 1), (4, 1)]);
}

#[tokio::test]
async fn test_unknown_product_is_stored_but_not_listed() {
    let (basket, _handle) = start_basket();

    let line = basket.add(ProductId(999), 1).await.expect("unknown ids are accepted");
    assert_eq!(line.quantity, 1);
    assert!(basket.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_additions_leave_basket_unchanged() {
    let (basket, _handle) = start_basket();

    assert_eq!(
        basket.add(ProductId(1), 0).await,
        Err(BasketError::InvalidQuantity(0))
    );
    assert!(basket.list().await.unwrap().is_empty());

    basket.add(ProductId(1), u32::MAX).await.unwrap();
    assert!(matches!(
        basket.add(ProductId(1), 1).await,
        Err(BasketError::QuantityOverflow { current: u32::MAX, added: 1, .. })
    ));
    assert_eq!(basket.list().await.unwrap()[0].quantity, u32::MAX);
}

#[tokio::test]
async fn test_remove_and_clear() {
    let (basket, _handle) = start_basket();
    basket.add(ProductId(1), 1).await.unwrap();
    basket.add(ProductId(2), 3).await.unwrap();

    basket.remove(ProductId(1)).await.unwrap();
    assert_eq!(
        basket.remove(ProductId(1)).await,
        Err(BasketError::NotInBasket(ProductId(1)))
    );

    assert_eq!(basket.clear().await.unwrap(), 1);
    assert!(basket.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_actor_stops_when_clients_are_dropped() {
    let (basket, handle) = start_basket();
    basket.add(ProductId(1), 1).await.unwrap();

    drop(basket);
    handle.await.expect("actor task should finish cleanly");
}
