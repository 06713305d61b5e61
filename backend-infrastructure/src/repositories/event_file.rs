use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use tokio::fs;

use backend_domain::{Event, EventRepository};

// Saves rewrite the file in place, no temp-file-and-rename.
pub struct JsonFileEventRepository {
    path: PathBuf,
}

impl JsonFileEventRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn render_events(events: &[Event]) -> anyhow::Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    events.serialize(&mut serializer)?;
    Ok(out)
}

#[async_trait]
impl EventRepository for JsonFileEventRepository {
    async fn load_events(&self) -> anyhow::Result<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read {}", self.path.display()))?;
        let events: Vec<Event> = serde_json::from_str(&content)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(events)
    }

    async fn save_events(&self, events: &[Event]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = render_events(events)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}
