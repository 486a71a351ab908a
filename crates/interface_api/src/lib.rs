//! HTTP API layer
//!
//! REST interface over the client and contract use cases, built with
//! Axum. Handlers validate request DTOs, run the matching use case and
//! map domain failures onto problem-details error bodies.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_client::{ClientRepository, ContractRepository};

use crate::handlers::{client, contract, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub contracts: Arc<dyn ContractRepository>,
}

impl AppState {
    pub fn new(clients: Arc<dyn ClientRepository>, contracts: Arc<dyn ContractRepository>) -> Self {
        Self { clients, contracts }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let client_routes = Router::new()
        .route("/persons", post(client::create_person))
        .route("/companies", post(client::create_company))
        .route("/", get(client::list_clients))
        .route("/:id", get(client::get_client))
        .route("/:id", put(client::update_client))
        .route("/:id", delete(client::delete_client))
        .route("/:id/contracts", get(client::get_client_with_contracts));

    let contract_routes = Router::new()
        .route("/", post(contract::create_contract))
        .route("/active", get(contract::list_active_contracts))
        .route("/active/total-cost", get(contract::total_active_cost))
        .route("/:id/cost", put(contract::update_contract_cost));

    let api_routes = Router::new()
        .nest("/clients", client_routes)
        .nest("/contracts", contract_routes);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(error::attach_instance))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
