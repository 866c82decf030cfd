//! # HTTP Surface
//!
//! Axum router over a [`ShoppingAgent`] and the catalog.
//!
//! | Route | Handler |
//! |---|---|
//! | `POST /api/agent/run` | [`routes::run_agent`] |
//! | `GET /api/products` | [`routes::list_products`] |
//! | `GET /api/health` | [`routes::health`] |

pub mod routes;

use crate::agent::ShoppingAgent;
use crate::catalog::ProductLookup;
use crate::error::AgentError;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub agent: ShoppingAgent,
    pub catalog: Arc<dyn ProductLookup>,
}

/// Builds the application router.
///
/// CORS admits the single `allowed_origin`, mirrors requested methods and headers,
/// and allows credentials.
pub fn router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/api/agent/run", post(routes::run_agent))
        .route("/api/products", get(routes::list_products))
        .route("/api/health", get(routes::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        let status = match &self {
            AgentError::InvalidInput | AgentError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AgentError::PlanSource(_) | AgentError::Basket(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
