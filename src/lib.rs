//! Fleet Inventory Server
//!
//! A REST JSON API for listing, filtering, creating, updating and deleting
//! fleet vehicle records held in an in-memory store.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the store and services described by `config`
    pub fn new(config: AppConfig) -> Self {
        let repository = if config.store.seed_sample_data {
            Repository::with_sample_data()
        } else {
            Repository::new()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(repository)),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let enable_swagger = state.config.api.enable_swagger;

    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Vehicles
        .route("/vehicles", get(api::vehicles::list_vehicles))
        .route("/vehicles", post(api::vehicles::create_vehicle))
        .route("/vehicles/:slNo", get(api::vehicles::get_vehicle))
        .route("/vehicles/:slNo", put(api::vehicles::update_vehicle))
        .route("/vehicles/:slNo", delete(api::vehicles::delete_vehicle))
        .with_state(state);

    let mut app = Router::new().nest("/api", api_routes);

    // OpenAPI documentation
    if enable_swagger {
        app = app.merge(api::openapi::create_openapi_router());
    }

    app.layer(CatchPanicLayer::custom(api::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
