//! HTTP adapters - REST API implementations.
//!
//! Each surface has its own HTTP adapter; `app_router` assembles them.

pub mod ingest;
pub mod wizard;

pub use ingest::ingest_routes;
pub use wizard::{health_routes, wizard_routes, WizardHandlers};

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::ports::{ContentBackend, WizardStore};

/// Builds the full application router.
///
/// The wizard API gets CORS from `server.cors_origins` (any origin when
/// unset). The ingest endpoint sets its own headers.
pub fn app_router(
    config: &AppConfig,
    store: Arc<dyn WizardStore>,
    backend: Arc<dyn ContentBackend>,
) -> Router {
    let handlers = WizardHandlers::new(store, backend, config.features.navigation_policy());

    let api = Router::new()
        .nest("/api/wizards", wizard_routes(handlers.clone()))
        .merge(health_routes(handlers))
        .layer(cors_layer(&config.server.cors_origins_list()));

    let mut router = api
        .merge(ingest_routes())
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}
