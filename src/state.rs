use crate::config::AppConfig;
use crate::storage::{JsonFileStore, UserStore};
use crate::users::services::UserDirectory;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<UserDirectory>,
}

impl AppState {
    /// Builds the state around the configured users file. Nothing is read yet.
    pub fn init(config: AppConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.users_file.clone())) as Arc<dyn UserStore>;
        Self::from_parts(Arc::new(config), store)
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn UserStore>) -> Self {
        Self {
            config,
            users: Arc::new(UserDirectory::new(store)),
        }
    }
}

impl FromRef<AppState> for Arc<UserDirectory> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.users)
    }
}
