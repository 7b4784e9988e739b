use std::sync::Arc;

use crate::config::Config;
use crate::store::ContentStore;
use axum::extract::FromRef;

pub type SharedStore = Arc<dyn ContentStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
