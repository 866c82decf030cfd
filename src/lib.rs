//! # Shop Agent
//!
//! A small shopping assistant over a fixed laptop catalog. A user prompt goes to a
//! language model, which answers with a JSON *plan*; the plan's actions are then run
//! against the catalog and a shared basket.
//!
//! ```text
//! prompt ─► PlanSource ─► Plan ─► PlanExecutor ─► [ToolResult]
//!                                   │        │
//!                              Catalog   basket actor
//! ```
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic keyed-store actor, `ResourceActor<T>`, that owns its state and serves
//! requests over a channel. The basket is one instance of it.
//!
//! ### 2. The Data ([`model`], [`catalog`])
//! Products, basket lines, plans and tool results; the read-only catalog behind the
//! [`ProductLookup`](catalog::ProductLookup) trait.
//!
//! ### 3. The Basket ([`basket_actor`], [`clients`])
//! [`BasketLine`](model::BasketLine) implements [`ActorEntity`](framework::ActorEntity);
//! [`BasketClient`](clients::BasketClient) is the typed API over it.
//!
//! ### 4. The Agent ([`planner`], [`executor`], [`agent`])
//! [`PlanSource`](planner::PlanSource) derives plans (Gemini in production), with
//! lenient parsing and a fallback for unusable model output.
//! [`PlanExecutor`](executor::PlanExecutor) runs them;
//! [`ShoppingAgent`](agent::ShoppingAgent) is the request boundary.
//!
//! ### 5. The Edges ([`server`], [`lifecycle`])
//! The axum router, startup configuration, tracing setup and
//! [`ShopSystem`](lifecycle::ShopSystem), which wires everything together.
//!
//! ## Running
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run
//! curl -X POST localhost:5297/api/agent/run \
//!      -H 'content-type: application/json' \
//!      -d '{"prompt":"a laptop with at least 12GB RAM, add the Lenovo"}'
//! ```

pub mod agent;
pub mod basket_actor;
pub mod catalog;
pub mod clients;
pub mod error;
pub mod executor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod planner;
pub mod server;
