use thiserror::Error;

use crate::value_objects::EventId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),
    #[error("event {0} not found")]
    EventNotFound(EventId),
    #[error("'{attendee}' has already RSVP'd to event {event_id}")]
    DuplicateRsvp { event_id: EventId, attendee: String },
    #[error("'{attendee}' has not RSVP'd to event {event_id} or is already marked")]
    AttendanceRejected { event_id: EventId, attendee: String },
}
