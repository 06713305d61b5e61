use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum::{Form, Json};
use tracing::warn;

use backend_application::commands::event_commands;
use backend_application::queries::event_queries;
use backend_application::{AppError, AppState};
use backend_domain::{Event, EventId};

use crate::error::{HttpError, StatusBody};
use crate::middleware::{authorize, validate_attendee, validate_event_form, AttendeeForm, EventForm};

pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let events = event_queries::list_events(&state).await?;
    Ok(Json(events))
}

pub async fn add_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<EventForm>,
) -> Result<Redirect, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let new_event = validate_event_form(form)?;
    event_commands::create_event(&state, new_event)
        .await
        .map_err(log_rejection)?;
    Ok(Redirect::to("/"))
}

pub async fn view_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<u64>,
) -> Result<Json<Event>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let event = event_queries::get_event(&state, EventId(event_id)).await?;
    Ok(Json(event))
}

pub async fn rsvp_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<u64>,
    Form(form): Form<AttendeeForm>,
) -> Result<Json<StatusBody>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let attendee = validate_attendee(form)?;
    event_commands::rsvp_event(&state, EventId(event_id), &attendee)
        .await
        .map_err(log_rejection)?;
    Ok(Json(StatusBody::new("RSVP added successfully")))
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<u64>,
    Form(form): Form<AttendeeForm>,
) -> Result<Json<StatusBody>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let attendee = validate_attendee(form)?;
    event_commands::mark_attendance(&state, EventId(event_id), &attendee)
        .await
        .map_err(log_rejection)?;
    Ok(Json(StatusBody::new("Attendance marked successfully")))
}

fn log_rejection(err: AppError) -> HttpError {
    if let AppError::Event(reason) = &err {
        warn!("request rejected: {}", reason);
    }
    HttpError::from(err)
}
