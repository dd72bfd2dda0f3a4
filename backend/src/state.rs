//! Application state shared with every handler.
//!
//! `AppState` is built once in `main.rs` and injected as `web::Data`. It
//! holds no connections or caches: the stores are path handles that open a
//! connection per operation, so a handler's storage access is scoped to the
//! call that makes it.

use crate::config::Config;
use crate::storage::{DonationStore, RequestStore, UserStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub users: UserStore,
    pub requests: RequestStore,
    pub donations: DonationStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            users: UserStore::new(config.users_db_path()),
            requests: RequestStore::new(config.requests_db_path()),
            donations: DonationStore::new(config.donations_db_path()),
            config: Arc::new(config),
        }
    }
}
