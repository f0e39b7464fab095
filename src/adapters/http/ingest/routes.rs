//! HTTP route for the ingest endpoint.

use axum::{routing::any, Router};

use super::handlers::ingest;

/// Creates the ingest router, answering every method on `/api`.
pub fn ingest_routes() -> Router {
    Router::new().route("/api", any(ingest))
}
