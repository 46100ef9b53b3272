use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use roster_server::api;
use roster_server::backend::database::{sqlite::schema, DatabaseBackendConfig};
use roster_server::backend::{Backend, BackendFactory, RosterBackend};

/// Create a backend for testing with an in-memory SQLite database
pub async fn setup_test_backend() -> Result<Arc<dyn RosterBackend>, Box<dyn std::error::Error>> {
    let backend_config = DatabaseBackendConfig::memory();
    let backend = BackendFactory::create(&backend_config).await?;

    backend.init_schema(schema::DEFAULT_SCHEMA).await?;

    Ok(backend)
}

/// Create a test app with an in-memory database behind the router
pub async fn setup_test_app() -> Result<Router, Box<dyn std::error::Error>> {
    let backend = setup_test_backend().await?;

    Ok(api::router(backend))
}

/// Spin up a test server over a fresh in-memory database
pub async fn setup_test_server() -> TestServer {
    let app = setup_test_app().await.unwrap();
    TestServer::new(app).unwrap()
}

/// Create a user over HTTP; ids are assigned in insertion order starting at 1
#[allow(dead_code)]
pub async fn create_user(server: &TestServer, username: &str, email: &str) {
    let response = server
        .post("/v1/users/")
        .json(&json!({ "username": username, "email": email }))
        .await;
    response.assert_status_ok();
}

/// Create a group over HTTP; ids are assigned in insertion order starting at 1
#[allow(dead_code)]
pub async fn create_group(server: &TestServer, group_name: &str) {
    let response = server
        .post("/v1/groups/")
        .json(&json!({ "group_name": group_name }))
        .await;
    response.assert_status_ok();
}
