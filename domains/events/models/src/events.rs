use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

use crate::event_types::EventType;

/// Name of the backing collection.
pub const EVENT_COLLECTION: &str = "event";

/// A fully-validated event record, ready for insertion.
#[derive(
    Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder, ToSchema,
)]
pub struct NewEvent {
    pub title: String,
    #[builder(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    #[builder(default)]
    pub event_type: EventType,
    pub start_date: DateTime<Utc>,
    #[builder(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[builder(default)]
    pub location_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[builder(default)]
    pub city: Option<String>,
    #[builder(default)]
    pub country: Option<String>,
    #[builder(default)]
    pub url: Option<String>,
}

impl NewEvent {
    /// Explicit mapping to the stored document shape. Timestamps become
    /// native BSON datetimes (the store understands temporal types; text
    /// rendering happens only on the read path). Absent optionals are
    /// omitted rather than stored as nulls.
    pub fn into_document(self) -> Document {
        let mut document = doc! {
            "title": self.title,
            "type": self.event_type,
            "start_date": bson::DateTime::from_chrono(self.start_date),
            "latitude": self.latitude,
            "longitude": self.longitude,
        };

        if let Some(description) = self.description {
            document.insert("description", description);
        }
        if let Some(end_date) = self.end_date {
            document.insert("end_date", bson::DateTime::from_chrono(end_date));
        }
        if let Some(location_name) = self.location_name {
            document.insert("location_name", location_name);
        }
        if let Some(city) = self.city {
            document.insert("city", city);
        }
        if let Some(country) = self.country {
            document.insert("country", country);
        }
        if let Some(url) = self.url {
            document.insert("url", url);
        }

        document
    }
}
