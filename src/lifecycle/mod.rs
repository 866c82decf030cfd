//! Runtime orchestration.
//!
//! - [`ShopSystem`] - Starts, wires and stops the actors and the agent
//! - [`AppConfig`] - Environment-driven startup settings
//! - [`setup_tracing`] - Initializes logging

pub mod config;
pub mod shop_system;
pub mod tracing;

pub use config::*;
pub use shop_system::*;
pub use self::tracing::*;
