use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable role source. Default: StaticRoleCatalog::builtin(). Swap via ROLE_CATALOG_PATH.
    pub catalog: Arc<dyn RoleCatalog>,
}
