//! Integration test for the health check endpoint.

mod common;

use serde_json::Value;

#[tokio::test]
async fn healthz_reports_ok_and_version() {
    let (server, _store) = common::test_server();

    let response = server.get("/healthz").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
