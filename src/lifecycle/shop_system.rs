use crate::agent::ShoppingAgent;
use crate::basket_actor;
use crate::catalog::{Catalog, ProductLookup};
use crate::clients::BasketClient;
use crate::executor::PlanExecutor;
use crate::lifecycle::AppConfig;
use crate::planner::{GeminiPlanSource, PlanSource, PlanSourceError};
use crate::server::AppState;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the running pieces of the shop: the catalog, the basket actor and the
/// agent built on top of them.
///
/// # Wiring
///
/// 1. The catalog is seeded and shared as `Arc<dyn ProductLookup>`.
/// 2. The basket actor is spawned with the catalog as its context.
/// 3. The executor and agent receive clients; nothing holds the actor itself.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new(AppConfig::from_env()?)?;
/// let response = system.agent.run("show my basket").await?;
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub agent: ShoppingAgent,
    pub basket: BasketClient,
    pub catalog: Arc<dyn ProductLookup>,

    /// Actor task handles, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Starts the system with a Gemini-backed planner. Must be called inside a
    /// Tokio runtime.
    pub fn new(config: AppConfig) -> Result<Self, PlanSourceError> {
        let plan_source = GeminiPlanSource::new(config.gemini)?;
        Ok(Self::with_plan_source(Arc::new(plan_source)))
    }

    /// Starts the system with any plan source.
    pub fn with_plan_source(plan_source: Arc<dyn PlanSource>) -> Self {
        let catalog: Arc<dyn ProductLookup> = Arc::new(Catalog::seeded());

        let (basket_actor, basket_client) = basket_actor::new();
        let basket_handle = tokio::spawn(basket_actor.run(catalog.clone()));
        let basket = BasketClient::new(basket_client, catalog.clone());

        let executor = PlanExecutor::new(catalog.clone(), basket.clone());
        let agent = ShoppingAgent::new(plan_source, executor);
        info!("Shop system started");

        Self {
            agent,
            basket,
            catalog,
            handles: vec![basket_handle],
        }
    }

    /// Handler state for [`server::router`](crate::server::router).
    pub fn app_state(&self) -> AppState {
        AppState {
            agent: self.agent.clone(),
            catalog: self.catalog.clone(),
        }
    }

    /// Drops this system's client handles and waits for the actors to stop.
    ///
    /// Actors stop once every client clone is gone, so router state built from
    /// [`ShopSystem::app_state`] must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.agent);
        drop(self.basket);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
