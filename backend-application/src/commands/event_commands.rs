use tracing::{error, info};

use backend_domain::{Event, EventBook, EventError, EventId, NewEvent};

use crate::{AppError, AppState};

pub async fn create_event(state: &AppState, new_event: NewEvent) -> Result<Event, AppError> {
    let _guard = state.write_lock.lock().await;
    let mut book = load_book(state).await?;
    let event = book
        .create_event(new_event)
        .map_err(|err| rejected(state, err))?;
    save_book(state, &book).await?;
    state.metrics.record_event_created();
    info!(event_id = %event.id, name = %event.name, "event created");
    Ok(event)
}

pub async fn rsvp_event(state: &AppState, event_id: EventId, attendee: &str) -> Result<(), AppError> {
    let _guard = state.write_lock.lock().await;
    let mut book = load_book(state).await?;
    book.rsvp(event_id, attendee)
        .map_err(|err| rejected(state, err))?;
    save_book(state, &book).await?;
    state.metrics.record_rsvp();
    info!(event_id = %event_id, attendee, "rsvp recorded");
    Ok(())
}

pub async fn mark_attendance(
    state: &AppState,
    event_id: EventId,
    attendee: &str,
) -> Result<(), AppError> {
    let _guard = state.write_lock.lock().await;
    let mut book = load_book(state).await?;
    book.mark_attendance(event_id, attendee)
        .map_err(|err| rejected(state, err))?;
    save_book(state, &book).await?;
    state.metrics.record_attendance();
    info!(event_id = %event_id, attendee, "attendance marked");
    Ok(())
}

pub(crate) async fn load_book(state: &AppState) -> Result<EventBook, AppError> {
    let events = state.event_repo.load_events().await.map_err(|err| {
        error!("failed to load events: {:#}", err);
        state.metrics.record_storage_error();
        AppError::Internal(err)
    })?;
    Ok(EventBook::new(events))
}

async fn save_book(state: &AppState, book: &EventBook) -> Result<(), AppError> {
    state
        .event_repo
        .save_events(book.events())
        .await
        .map_err(|err| {
            error!("failed to save events: {:#}", err);
            state.metrics.record_storage_error();
            AppError::Internal(err)
        })
}

fn rejected(state: &AppState, err: EventError) -> AppError {
    state.metrics.record_rejection(&err);
    AppError::Event(err)
}
