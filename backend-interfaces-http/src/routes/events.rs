use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{event_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(event_handlers::list_events))
        .route("/add-event", post(event_handlers::add_event))
        .route("/event/:event_id", get(event_handlers::view_event))
        .route("/rsvp/:event_id", post(event_handlers::rsvp_event))
        .route("/attendance/:event_id", post(event_handlers::mark_attendance))
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route("/ops/health/ready", get(ops_handlers::health_ready))
        .route("/ops/metrics/prometheus", get(ops_handlers::metrics_prometheus))
        .with_state(state)
}
