//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder structure:
//! - `services.rs`: document store + pipeline wiring, one per resource kind
//! - `routes/`: HTTP routes + handlers (generic CRUD, one file per resource)
//! - `errors.rs`: the single boundary translating pipeline outcomes into
//!   transport responses

use axum::{Router, http::StatusCode, routing::get};

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let services = services::AppServices::new();

    Router::new()
        .route("/health", get(health))
        .merge(routes::router(&services))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
