//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p webfolio-api --test uploads_test`
//! or `cargo test -p webfolio-api`.

pub mod fixtures;

use axum_test::TestServer;
use std::sync::Arc;
use webfolio_api::setup::routes;
use webfolio_api::state::AppState;
use webfolio_core::Config;

/// Test application wrapping the in-process server.
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup test app with an in-memory router, no listening socket.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_config(create_test_config())
}

/// Same, with a caller-supplied config for limit and allow-list tests.
pub fn setup_test_app_with_config(config: Config) -> TestApp {
    let state = Arc::new(AppState::new(config.clone()));

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp { server }
}

pub fn create_test_config() -> Config {
    Config {
        server_port: 4000,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        max_body_size_bytes: 10 * 1024 * 1024,
        allowed_extensions: vec![
            "jpg".into(),
            "jpeg".into(),
            "png".into(),
            "gif".into(),
            "bmp".into(),
            "tiff".into(),
            "webp".into(),
        ],
        webp_quality: 100.0,
    }
}
