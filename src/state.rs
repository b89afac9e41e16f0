use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Shared handles built once at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            orm,
            config: Arc::new(config),
        }
    }
}
