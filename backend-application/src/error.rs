use backend_domain::EventError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
