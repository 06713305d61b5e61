// Event category value object

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    Business,
    Personal,
    Conference,
    Wedding,
    Other(String),
}

impl EventCategory {
    pub fn as_str(&self) -> &str {
        match self {
            EventCategory::Business => "Business",
            EventCategory::Personal => "Personal",
            EventCategory::Conference => "Conference",
            EventCategory::Wedding => "Wedding",
            EventCategory::Other(value) => value,
        }
    }
}

impl From<&str> for EventCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "business" => EventCategory::Business,
            "personal" => EventCategory::Personal,
            "conference" => EventCategory::Conference,
            "wedding" => EventCategory::Wedding,
            _ => EventCategory::Other(s.to_string()),
        }
    }
}

impl From<String> for EventCategory {
    fn from(s: String) -> Self {
        EventCategory::from(s.as_str())
    }
}

impl From<EventCategory> for String {
    fn from(value: EventCategory) -> Self {
        match value {
            EventCategory::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
