//! Shared application state.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::codegen::CodeGenerator;
use crate::domain::store::LinkStore;

/// Handler-visible application state.
///
/// Cheap to clone; both services share the same store instance.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    /// Wires services over a store and candidate generator.
    pub fn new(store: Arc<dyn LinkStore>, codegen: CodeGenerator) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store.clone(), codegen)),
            redirect_service: Arc::new(RedirectService::new(store)),
        }
    }
}
