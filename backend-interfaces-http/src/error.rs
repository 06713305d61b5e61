use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use backend_application::AppError;
use backend_domain::EventError;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::Unauthorized => HttpError::Unauthorized,
            AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            AppError::Event(err) => HttpError::from(err),
            AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

impl From<EventError> for HttpError {
    fn from(value: EventError) -> Self {
        match value {
            EventError::InvalidDateFormat(_) => {
                HttpError::BadRequest("Invalid date format!".to_string())
            }
            EventError::EventNotFound(_) => HttpError::NotFound("Event not found".to_string()),
            EventError::DuplicateRsvp { .. } => {
                HttpError::BadRequest("You have already RSVP'd".to_string())
            }
            EventError::AttendanceRejected { .. } => {
                HttpError::BadRequest("Attendee has not RSVP'd or already marked".to_string())
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: String,
}

impl StatusBody {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(StatusBody::new(message))).into_response()
    }
}
