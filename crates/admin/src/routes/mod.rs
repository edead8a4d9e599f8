//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                     - Liveness (no token)
//! GET    /health/ready               - Readiness (no token)
//!
//! # Everything below requires `Authorization: Bearer <token>`
//! GET    /api/configuration          - Pricing configuration
//! PUT    /api/configuration          - Upsert pricing configuration
//! GET    /api/products               - Product listing (with purchase cost)
//! POST   /api/products               - Create one product
//! POST   /api/products/bulk          - Create N copies of a template
//! PUT    /api/products/{id}          - Partial update
//! DELETE /api/products/{id}          - Delete
//! GET    /api/products/{id}/cost     - Landed cost and margin
//! POST   /api/collaborations         - Create collaboration
//! DELETE /api/collaborations/{id}    - Delete collaboration
//! GET    /api/users                  - Profile listing
//! PUT    /api/users/{id}/role        - Assign role
//! ```

pub mod collaborations;
pub mod configuration;
pub mod health;
pub mod products;
pub mod users;

use std::time::Duration;

use axum::{
    Router,
    http::{Request, Response},
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::require_admin_token;
use crate::state::AppState;

/// A bare `limit` parameter for listings.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

/// Token-protected API routes, relative to `/api`.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/configuration",
            get(configuration::show).put(configuration::update),
        )
        .route("/products", get(products::index).post(products::create))
        .route("/products/bulk", post(products::bulk_create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route("/products/{id}/cost", get(products::cost))
        .route("/collaborations", post(collaborations::create))
        .route("/collaborations/{id}", delete(collaborations::delete))
        .route("/users", get(users::index))
        .route("/users/{id}/role", put(users::set_role))
        .route_layer(from_fn_with_state(state, require_admin_token))
}

/// Build the full application router. Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes(state.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
