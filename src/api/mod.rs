pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::ml::ModelRegistry;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and injected into handlers; the registry is
/// immutable after load, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ModelRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }
}
