// Event entity
// A dated activity tracked for RSVPs and attendance

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::value_objects::{Budget, EventCategory, EventId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(with = "crate::utils::event_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub category: EventCategory,
    pub budget: Budget,
    #[serde(default)]
    pub rsvp: Vec<String>,
    #[serde(default)]
    pub attendance: Vec<String>,
    // Never populated; carried through load/save untouched.
    #[serde(default)]
    pub planners: Vec<serde_json::Value>,
    #[serde(default)]
    pub notifications: Vec<serde_json::Value>,
    #[serde(default)]
    pub team: Vec<serde_json::Value>,
}

impl Event {
    pub fn has_rsvp(&self, attendee: &str) -> bool {
        self.rsvp.iter().any(|name| name == attendee)
    }

    pub fn has_attended(&self, attendee: &str) -> bool {
        self.attendance.iter().any(|name| name == attendee)
    }

    pub fn record_rsvp(&mut self, attendee: &str) -> Result<(), EventError> {
        if self.has_rsvp(attendee) {
            return Err(EventError::DuplicateRsvp {
                event_id: self.id,
                attendee: attendee.to_string(),
            });
        }
        self.rsvp.push(attendee.to_string());
        Ok(())
    }

    pub fn record_attendance(&mut self, attendee: &str) -> Result<(), EventError> {
        if !self.has_rsvp(attendee) || self.has_attended(attendee) {
            return Err(EventError::AttendanceRejected {
                event_id: self.id,
                attendee: attendee.to_string(),
            });
        }
        self.attendance.push(attendee.to_string());
        Ok(())
    }
}
