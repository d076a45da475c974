#![allow(dead_code)]

use serde_json::Value;
use shapeshift_io_rs::ShapeShift;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub async fn start_server() -> (MockServer, ShapeShift) {
    let server = MockServer::start().await;
    let client = ShapeShift::with_base_url(server.uri()).expect("client should build");
    (server, client)
}

/// Serves `body` with status 200 on `GET {resource}`, expecting exactly one hit.
pub async fn mock_json(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(resource))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Fails the test on drop if any request reaches the server.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}
