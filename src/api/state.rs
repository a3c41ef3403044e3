use std::sync::Arc;

use crate::auth::IdentityResolver;
use crate::config::RelayConfig;
use crate::domain::RelayStore;

/// Shared handles passed to every handler via `Router::with_state`
///
/// Both the resolver and the store are built once at startup and shared
/// read-only (the store synchronizes its own queues internally).
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<IdentityResolver>,
    pub store: Arc<RelayStore>,
}

impl AppState {
    /// Builds the resolver and queue store from configuration
    ///
    /// The store gets one queue per agent the resolver knows about, so
    /// the two structures always share the same identity keyspace.
    pub fn from_config(config: &RelayConfig) -> Self {
        let resolver = IdentityResolver::new(&config.agent_tokens);
        let store = RelayStore::new(resolver.agent_names().map(str::to_string));

        Self {
            resolver: Arc::new(resolver),
            store: Arc::new(store),
        }
    }
}
