use std::fmt;

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed set of event categories. This is the single source of truth
/// shared between create-time validation (via serde) and list-time
/// filtering.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Worship,
    Conference,
    Retreat,
    Concert,
    Service,
    Youth,
    Prayer,
    #[default]
    Other,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::Worship,
        EventType::Conference,
        EventType::Retreat,
        EventType::Concert,
        EventType::Service,
        EventType::Youth,
        EventType::Prayer,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Worship => "worship",
            EventType::Conference => "conference",
            EventType::Retreat => "retreat",
            EventType::Concert => "concert",
            EventType::Service => "service",
            EventType::Youth => "youth",
            EventType::Prayer => "prayer",
            EventType::Other => "other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EventType> for Bson {
    fn from(event_type: EventType) -> Self {
        Bson::String(event_type.as_str().to_string())
    }
}
