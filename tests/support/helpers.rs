// tests/support/helpers.rs
use super::mocks::{
    FakeTokenManager, FixedClock, InMemoryStore, RecordingImporter, StaticThemes, token_for,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use blog_admin::application::{
    ports::{
        security::TokenManager, syndication::SyndicationImporter, themes::ThemeStorage,
        time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use blog_admin::domain::unit_of_work::UnitOfWorkFactory;
use blog_admin::infrastructure::util::DefaultSlugGenerator;
use blog_admin::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "https://blog.example/";

pub fn build_services(store: &InMemoryStore, importer: &RecordingImporter) -> ApplicationServices {
    let uow: Arc<dyn UnitOfWorkFactory> = Arc::new(store.factory());
    let themes: Arc<dyn ThemeStorage> = Arc::new(StaticThemes);
    let importer: Arc<dyn SyndicationImporter> = Arc::new(importer.clone());
    let token_manager: Arc<dyn TokenManager> = Arc::new(FakeTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    ApplicationServices::new(uow, themes, importer, token_manager, clock, slugger)
}

pub fn make_test_router_with(store: &InMemoryStore, importer: &RecordingImporter) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(store, importer)),
        public_base_url: TEST_BASE_URL.into(),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(&InMemoryStore::new(), &RecordingImporter::default())
}

pub fn get(uri: &str, identity: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token_for(identity)))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, identity: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token_for(identity)))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

pub fn assert_redirect(resp: &Response, location: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let actual = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(actual, location);
}

/// Checks the `{error, message}` envelope and returns the parsed body.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message"
    );
    json
}
