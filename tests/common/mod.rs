use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use craftplace::craftplace_config::{CorsConfig, JwtConfig};
use craftplace::router::init_router;
use craftplace::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "craftplace-integration-test-secret-0123456789";

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub login: String,
    pub password: String,
}

/// Builds the full router over a fresh in-memory store. The state is returned
/// alongside so tests can mint tokens directly.
pub fn setup_test_app() -> (Router, AppState) {
    let jwt_config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    };
    let cors_config = CorsConfig {
        allowed_origins: vec!["http://localhost:3000".to_string()],
    };

    let state = AppState::new(jwt_config, cors_config).unwrap();
    (init_router(state.clone()), state)
}

pub fn generate_unique_login() -> String {
    format!("user_{}", &Uuid::new_v4().simple().to_string()[..12])
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn register_user(app: &Router, login: &str, password: &str) -> TestUser {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/v1/auth-user/register",
            json!({ "username": "Test Maker", "login": login, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let id = body["id"].as_str().unwrap().parse().unwrap();

    TestUser {
        id,
        login: login.to_string(),
        password: password.to_string(),
    }
}

pub async fn login(app: &Router, login: &str, password: &str) -> String {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/v1/auth-user/login",
            json!({ "login": login, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["access_token"].as_str().unwrap().to_string()
}
