#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use url::Url;

use mudae_api::config::{DistanceStrategy, ServerConfig};
use mudae_api::router::build_app_router;
use mudae_api::state::AppState;
use mudae_core::distance::{DistanceResolver, FixedDistance};
use mudae_core::service::ProfileService;
use mudae_core::store::MemoryProfileStore;

/// Public base URL used by test configurations.
pub const TEST_BASE_URL: &str = "http://mudae.test";

/// Build a test `ServerConfig` with safe defaults and the fixed distance strategy.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        public_base_url: Url::parse(TEST_BASE_URL).unwrap(),
        assets_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets").to_string(),
        distance: DistanceStrategy::Fixed { km: 50.0 },
    }
}

/// Build the full application router over an in-memory store with a fixed
/// 50 km distance.
pub fn build_test_app(store: Arc<MemoryProfileStore>) -> Router {
    build_test_app_with_resolver(store, Arc::new(FixedDistance::new(50.0)))
}

/// Build the full application router with a caller-supplied distance resolver.
pub fn build_test_app_with_resolver(
    store: Arc<MemoryProfileStore>,
    resolver: Arc<dyn DistanceResolver>,
) -> Router {
    let config = test_config();
    let state = AppState {
        service: Arc::new(ProfileService::new(store, resolver)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn get_html(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Some("text/html,application/xhtml+xml;q=0.9")).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

async fn send(app: Router, method: Method, uri: &str, accept: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(accept) = accept {
        builder = builder.header("accept", accept);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
