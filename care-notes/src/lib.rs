//! Care Notes API — in-memory care note service.
//!
//! Clients post short notes about care home residents and list everything
//! posted so far. Notes live only as long as the process.
//!
//! Default: http://0.0.0.0:8000/

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod store;
pub mod validation;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

pub use routes::AppState;
pub use store::NoteStore;

pub const SERVICE_TITLE: &str = "Care Notes API";

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Full application router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(routes::root))
        .route(
            "/care-notes",
            get(routes::list_notes).post(routes::create_note),
        )
        .with_state(state);

    with_layers(router)
}

/// Access log, panic recovery and permissive CORS, outermost last.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(axum::middleware::from_fn(middleware::access_log))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(CorsLayer::permissive())
}
