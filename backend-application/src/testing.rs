use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::{Event, EventRepository, HealthCheckService, RuntimeConfig};

use crate::AppState;

#[derive(Default)]
pub struct MemoryEventRepository {
    pub events: RwLock<Vec<Event>>,
    pub saves: AtomicUsize,
    pub fail_saves: bool,
}

impl MemoryEventRepository {
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn load_events(&self) -> anyhow::Result<Vec<Event>> {
        let events = self.events.read().await.clone();
        tokio::task::yield_now().await;
        Ok(events)
    }

    async fn save_events(&self, events: &[Event]) -> anyhow::Result<()> {
        if self.fail_saves {
            return Err(anyhow!("disk full"));
        }
        tokio::task::yield_now().await;
        *self.events.write().await = events.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheckService for AlwaysHealthy {
    async fn check_storage(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: None,
        events_path: "events.json".to_string(),
        max_body_bytes: 64 * 1024,
        request_timeout_seconds: 5,
    }
}

pub fn test_state(repo: Arc<MemoryEventRepository>) -> AppState {
    AppState::new(test_config(), repo, Arc::new(AlwaysHealthy))
}
