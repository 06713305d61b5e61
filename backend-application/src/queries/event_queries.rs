use backend_domain::{Event, EventId};

use crate::commands::event_commands::load_book;
use crate::{AppError, AppState};

pub async fn list_events(state: &AppState) -> Result<Vec<Event>, AppError> {
    Ok(load_book(state).await?.into_events())
}

pub async fn get_event(state: &AppState, event_id: EventId) -> Result<Event, AppError> {
    let book = load_book(state).await?;
    let event = book.find(event_id).map_err(|err| {
        state.metrics.record_rejection(&err);
        AppError::Event(err)
    })?;
    Ok(event.clone())
}
