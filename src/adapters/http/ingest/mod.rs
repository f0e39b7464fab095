//! HTTP adapter for the minimal `/api` ingest endpoint.

mod handlers;
mod routes;

pub use handlers::IngestResponse;
pub use routes::ingest_routes;
