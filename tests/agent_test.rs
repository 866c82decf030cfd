mod common;

use common::StubPlanSource;
use shop_agent::error::AgentError;
use shop_agent::lifecycle::ShopSystem;
use shop_agent::model::{Action, Plan, ProductId, SearchQuery, ToolResult};
use shop_agent::planner::PlanSourceError;

fn add(id: i64) -> Action {
    Action::AddToBasket {
        product_id: Some(ProductId(id)),
    }
}

#[tokio::test]
async fn test_blank_prompt_never_reaches_plan_source() {
    let source = StubPlanSource::returning(Plan::new(vec![Action::ShowBasket]));
    let system = ShopSystem::with_plan_source(source.clone());

    for prompt in ["", "   ", "\n\t"] {
        assert!(matches!(
            system.agent.run(prompt).await,
            Err(AgentError::InvalidInput)
        ));
    }
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_prompt_is_forwarded_untrimmed() {
    let source = StubPlanSource::returning(Plan::new(vec![Action::ShowBasket]));
    let system = ShopSystem::with_plan_source(source.clone());

    system.agent.run("  show my basket \n").await.unwrap();
    assert_eq!(source.prompts(), vec!["  show my basket \n".to_string()]);
}

#[tokio::test]
async fn test_add_then_show() {
    let source = StubPlanSource::returning(Plan::new(vec![add(2), Action::ShowBasket]));
    let system = ShopSystem::with_plan_source(source.clone());

    let response = system.agent.run("add product 2 to basket").await.unwrap();

    assert_eq!(response.plan.actions, vec![add(2), Action::ShowBasket]);
    assert_eq!(response.results.len(), 2);
    assert_eq!(
        response.results[0],
        ToolResult::Add {
            product_id: ProductId(2)
        }
    );
    match &response.results[1] {
        ToolResult::Basket { basket } => {
            assert_eq!(basket.len(), 1);
            assert_eq!(basket[0].id, ProductId(2));
            assert_eq!(basket[0].quantity, 1);
        }
        other => panic!("expected basket result, got {other:?}"),
    }
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_basket_is_shared_across_runs() {
    let source = StubPlanSource::returning(Plan::new(vec![add(4), Action::ShowBasket]));
    let system = ShopSystem::with_plan_source(source);

    system.agent.run("add the asus").await.unwrap();
    let response = system.agent.run("add the asus again").await.unwrap();

    let ToolResult::Basket { basket } = &response.results[1] else {
        panic!("expected basket result");
    };
    assert_eq!(basket[0].quantity, 2);
    assert_eq!(system.basket.list().await.unwrap()[0].quantity, 2);
}

#[tokio::test]
async fn test_fallback_plan_yields_no_results() {
    let source = StubPlanSource::returning(Plan::fallback());
    let system = ShopSystem::with_plan_source(source);

    let response = system.agent.run("gibberish").await.unwrap();
    assert_eq!(response.plan, Plan::fallback());
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_search_results_follow_filters() {
    let source = StubPlanSource::returning(Plan::new(vec![Action::SearchProducts(SearchQuery {
        query: Some("laptop".into()),
        min_ram: Some(12),
        cpu: Some("i5".into()),
    })]));
    let system = ShopSystem::with_plan_source(source);

    let response = system.agent.run("laptop, 12GB, i5").await.unwrap();
    let ToolResult::Search { products } = &response.results[0] else {
        panic!("expected search result");
    };
    let ids: Vec<i64> = products.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[tokio::test]
async fn test_plan_source_failure_is_propagated() {
    let source = StubPlanSource::without_key();
    let system = ShopSystem::with_plan_source(source.clone());

    let err = system.agent.run("anything").await.unwrap_err();
    assert!(matches!(err, AgentError::PlanSource(PlanSourceError::MissingApiKey)));
    assert_eq!(err.to_string(), "Gemini API key is not configured.");
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_shutdown_after_runs() {
    let source = StubPlanSource::returning(Plan::new(vec![add(1)]));
    let system = ShopSystem::with_plan_source(source);
    system.agent.run("add the hp").await.unwrap();

    system.shutdown().await.expect("clean shutdown");
}
