use std::sync::Arc;

use async_trait::async_trait;
use backend_domain::ports::{EventRepository, HealthCheckService};

pub struct DefaultHealthService {
    event_repo: Arc<dyn EventRepository>,
}

impl DefaultHealthService {
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        Self { event_repo }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_storage(&self) -> anyhow::Result<bool> {
        self.event_repo.load_events().await.map(|_| true)
    }
}
