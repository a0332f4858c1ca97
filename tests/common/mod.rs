#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use snaplink::api::routes::app_router;
use snaplink::prelude::*;

/// Builds application state over a fresh in-memory store.
pub fn test_state() -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let state = AppState::new(store.clone(), CodeGenerator::new());
    (state, store)
}

/// Spins up a test server over a fresh in-memory store.
pub fn test_server() -> (TestServer, Arc<MemoryLinkStore>) {
    let (state, store) = test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, store)
}
