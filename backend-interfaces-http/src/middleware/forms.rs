use serde::Deserialize;

use backend_domain::{Budget, EventCategory, NewEvent};

use crate::error::HttpError;

// Missing fields default so validation reports them as 400.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub budget: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AttendeeForm {
    pub attendee: String,
}

pub fn validate_event_form(form: EventForm) -> Result<NewEvent, HttpError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(HttpError::BadRequest("name is required".to_string()));
    }
    let category = form.category.trim();
    if category.is_empty() {
        return Err(HttpError::BadRequest("category is required".to_string()));
    }
    let budget = form
        .budget
        .parse::<Budget>()
        .map_err(|err| HttpError::BadRequest(err.to_string()))?;
    Ok(NewEvent {
        name: name.to_string(),
        // Format checking belongs to the event rules.
        date: form.date,
        description: form.description,
        category: EventCategory::from(category),
        budget,
    })
}

// Names are stored as entered; " Alice" and "Alice" are different attendees.
pub fn validate_attendee(form: AttendeeForm) -> Result<String, HttpError> {
    if form.attendee.trim().is_empty() {
        return Err(HttpError::BadRequest("attendee is required".to_string()));
    }
    Ok(form.attendee)
}
