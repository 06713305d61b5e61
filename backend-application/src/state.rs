use std::sync::Arc;

use backend_domain::ports::{EventRepository, HealthCheckService};
use backend_domain::RuntimeConfig;
use tokio::sync::Mutex;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventRepository>,
    pub health_service: Arc<dyn HealthCheckService>,
    pub metrics: Arc<Metrics>,
    // held for each load -> mutate -> save cycle
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        event_repo: Arc<dyn EventRepository>,
        health_service: Arc<dyn HealthCheckService>,
    ) -> Self {
        Self {
            config,
            event_repo,
            health_service,
            metrics: Arc::new(Metrics::default()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
