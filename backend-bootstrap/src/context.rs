use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_infrastructure::{AppConfig, DefaultHealthService, JsonFileEventRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let runtime_config = config.to_runtime_config();
        info!(
            events_path = %runtime_config.events_path,
            api_token_set = runtime_config.api_token.is_some(),
            "config loaded"
        );

        let event_repo = Arc::new(JsonFileEventRepository::new(&runtime_config.events_path));
        let health_service = Arc::new(DefaultHealthService::new(event_repo.clone()));
        let state = AppState::new(runtime_config, event_repo, health_service);

        Self { state }
    }
}
