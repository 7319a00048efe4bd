//! Application state

use std::sync::Arc;

use parking_lot::Mutex;
use users_core::UserStore;

use crate::config::ServerConfig;

/// Shared state handed to every handler.
///
/// The store sits behind one coarse lock so compound read-modify-write
/// operations appear atomic to concurrent requests. Handlers take the lock
/// for a single store call and never hold it across an await point.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub store: Arc<Mutex<UserStore>>,
}

impl AppState {
    /// State around a freshly seeded store.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, UserStore::seeded())
    }

    /// State around an explicit store instance, for tests that need
    /// specific contents.
    pub fn with_store(config: ServerConfig, store: UserStore) -> Self {
        Self {
            config,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
