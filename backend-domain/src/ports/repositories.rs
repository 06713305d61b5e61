use async_trait::async_trait;

use crate::entities::Event;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn load_events(&self) -> anyhow::Result<Vec<Event>>;
    async fn save_events(&self, events: &[Event]) -> anyhow::Result<()>;
}
