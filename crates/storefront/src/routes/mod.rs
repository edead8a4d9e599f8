//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Liveness
//! GET    /health/ready                    - Readiness (database ping)
//!
//! # Catalog
//! GET    /api/products                    - Filtered product listing
//! GET    /api/products/{id}               - Product detail
//! GET    /api/search?q=                   - Name/description search
//! GET    /api/collaborations              - Collaboration listing
//! GET    /api/collaborations/{id}         - Collaboration detail
//! GET    /api/collaborations/{id}/products - Products in a collaboration
//! GET    /api/vip/products?user_id=       - VIP catalog (VIP/admin only)
//!
//! # Cart
//! GET    /api/cart?user_id=               - Cart with totals
//! POST   /api/cart                        - Add line
//! DELETE /api/cart?user_id=               - Clear cart
//! PUT    /api/cart/{id}                   - Update line
//! DELETE /api/cart/{id}                   - Remove line
//!
//! # Favorites
//! GET    /api/favorites?user_id=          - Favorited products
//! POST   /api/favorites                   - Add (idempotent)
//! DELETE /api/favorites?user_id=&product_id= - Remove (idempotent)
//!
//! # Profiles
//! GET    /api/users/{id}                  - Profile
//! PUT    /api/users/{id}                  - Update display name
//! ```

pub mod cart;
pub mod collaborations;
pub mod favorites;
pub mod health;
pub mod products;
pub mod search;
pub mod users;
pub mod vip;

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Request, Response},
    middleware::from_fn,
    routing::{get, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// JSON API routes, relative to `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/search", get(search::search))
        .route("/collaborations", get(collaborations::index))
        .route("/collaborations/{id}", get(collaborations::show))
        .route("/collaborations/{id}/products", get(collaborations::products))
        .route("/vip/products", get(vip::index))
        .route(
            "/cart",
            get(cart::show).post(cart::add).delete(cart::clear),
        )
        .route("/cart/{id}", put(cart::update).delete(cart::remove))
        .route(
            "/favorites",
            get(favorites::index)
                .post(favorites::add)
                .delete(favorites::remove),
        )
        .route("/users/{id}", get(users::show).put(users::update))
}

/// Build the full application router with its middleware stack.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config().cors_origin.as_deref());

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
        .layer(cors)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
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

/// CORS for the configured browser origin; without one, cross-origin
/// requests get no CORS headers.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let Some(origin) = origin else {
        return CorsLayer::new();
    };

    match HeaderValue::from_str(origin) {
        Ok(value) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(value))
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(origin, "Ignoring invalid CORS origin");
            CorsLayer::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, StatusCode};
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{SentryConfig, StorefrontConfig};
    use crate::middleware::REQUEST_ID_HEADER;

    /// Router backed by a lazily-connecting pool; requests rejected during
    /// extraction or validation never touch the database.
    fn test_app() -> Router {
        let config = StorefrontConfig {
            database_url: SecretString::from("postgres://localhost/unused"),
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            cors_origin: Some("http://localhost:5173".to_string()),
            log_json: false,
            sentry: SentryConfig::default(),
        };
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        app(AppState::new(config, pool))
    }

    async fn send(request: Request<Body>) -> Response<Body> {
        test_app().oneshot(request).await.unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(get_request("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_request_id_echoed() {
        let request = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = send(request).await;
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn test_request_id_generated() {
        let response = send(get_request("/health")).await;
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_blank_search_rejected() {
        let response = send(get_request("/api/search?q=%20%20")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(get_request("/api/search")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_product_id_rejected() {
        let response = send(get_request("/api/products/not-a-uuid")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_inverted_price_range_rejected() {
        let response = send(get_request("/api/products?min_price=50&max_price=10")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cart_requires_user_id() {
        let response = send(get_request("/api/cart")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cart_add_rejects_zero_quantity() {
        let body = serde_json::json!({
            "user_id": uuid::Uuid::new_v4(),
            "product_id": uuid::Uuid::new_v4(),
            "quantity": 0,
        });
        let response = send(json_request(Method::POST, "/api/cart", &body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_profile_update_rejects_blank_name() {
        let uri = format!("/api/users/{}", uuid::Uuid::new_v4());
        let body = serde_json::json!({ "name": "   " });
        let response = send(json_request(Method::PUT, &uri, &body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/favorites")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = send(request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cors_preflight_for_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/products")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "GET")
            .body(Body::empty())
            .unwrap();
        let response = send(request).await;
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }
}
