use crate::entities::{Event, NewEvent};
use crate::error::EventError;
use crate::utils::parse_event_date;
use crate::value_objects::EventId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBook {
    events: Vec<Event>,
}

impl EventBook {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    // Unique only while events are never removed.
    pub fn next_id(&self) -> EventId {
        EventId(self.events.len() as u64 + 1)
    }

    pub fn create_event(&mut self, new_event: NewEvent) -> Result<Event, EventError> {
        let date = parse_event_date(&new_event.date)?;
        let event = Event {
            id: self.next_id(),
            name: new_event.name,
            date,
            description: new_event.description,
            category: new_event.category,
            budget: new_event.budget,
            rsvp: Vec::new(),
            attendance: Vec::new(),
            planners: Vec::new(),
            notifications: Vec::new(),
            team: Vec::new(),
        };
        self.events.push(event.clone());
        Ok(event)
    }

    pub fn find(&self, event_id: EventId) -> Result<&Event, EventError> {
        self.events
            .iter()
            .find(|event| event.id == event_id)
            .ok_or(EventError::EventNotFound(event_id))
    }

    fn find_mut(&mut self, event_id: EventId) -> Result<&mut Event, EventError> {
        self.events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or(EventError::EventNotFound(event_id))
    }

    pub fn rsvp(&mut self, event_id: EventId, attendee: &str) -> Result<(), EventError> {
        self.find_mut(event_id)?.record_rsvp(attendee)
    }

    pub fn mark_attendance(&mut self, event_id: EventId, attendee: &str) -> Result<(), EventError> {
        self.find_mut(event_id)?.record_attendance(attendee)
    }
}
