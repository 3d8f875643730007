//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router`. The listing
//! handler is a direct projection of the engine output; it holds no state
//! between requests, the page cursor travels in the query string.

pub mod handlers;

use super::super::host::ServerHost;
use anyhow::Result;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use handlers::RentalRow;

pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Rental listing and refresh routes
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let rental_routes = Router::new()
            .route("/rentals", get(handlers::list_rentals))
            .route("/rentals/refresh", post(handlers::refresh_rentals))
            .with_state(host);

        let mut app = Self::health_routes().merge(rental_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "rental-board"
        }))
    }
}
