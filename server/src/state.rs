//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; the config is `Arc`-wrapped and the session
//! store shares its map internally.

use std::sync::Arc;

use crate::config::Config;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config), sessions: SessionStore::new() }
    }
}
