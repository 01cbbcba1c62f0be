use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    config::{env::Env, ConfigProfile, Profile},
    extension::ExtensionRegistry,
    router::{self, AppService},
    state::AppState,
};

mod bootstrap;

/// Builds state for the testing profile on a fresh registry and in-memory database.
async fn testing_state(pairs: &[(&str, &str)]) -> AppState {
    let config =
        ConfigProfile::resolve(Profile::Testing, &Env::from_pairs(pairs.iter().copied())).unwrap();
    let extensions = ExtensionRegistry::new().initialize(&config).await.unwrap();

    AppState::new(extensions, Arc::new(config))
}

async fn testing_app(pairs: &[(&str, &str)]) -> (AppService, AppState) {
    let state = testing_state(pairs).await;
    (router::app(state.clone()), state)
}

async fn send(app: &AppService, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers a user through the API and returns their ID and an access token.
async fn register_and_login(app: &AppService, email: &str) -> (String, String) {
    let created = send(
        app,
        json_request(
            Method::POST,
            "/api/v1/users/",
            None,
            json!({
                "first_name": "Test",
                "last_name": "User",
                "email": email,
                "password": "long-enough-password"
            }),
        ),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_json(created).await["id"].as_str().unwrap().to_string();

    let login = send(
        app,
        json_request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            json!({ "email": email, "password": "long-enough-password" }),
        ),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let token = body_json(login).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    (id, token)
}
