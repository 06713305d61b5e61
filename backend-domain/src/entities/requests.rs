// Validated input for the store operations

use serde::{Deserialize, Serialize};

use crate::value_objects::{Budget, EventCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub description: String,
    pub category: EventCategory,
    pub budget: Budget,
}
