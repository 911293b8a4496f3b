use chrono::{DateTime, Utc};
use events_dao::EventDao;
use events_models::{EventType, NewEvent};
use events_responses::CreateEventResponse;
use mongo_connection::MongoConnect;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum CreateEventError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("Event DAO error: {0}")]
    Dao(#[from] events_dao::EventDaoError),
}

/// Create-event request body. Field constraints are declarative: length
/// and range checks through the validator derive, the `type` enumeration
/// through serde. Coordinates are validated here and never re-checked on
/// read.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventCommand {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location_name: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub city: Option<String>,
    pub country: Option<String>,
    pub url: Option<String>,
}

impl From<CreateEventCommand> for NewEvent {
    fn from(command: CreateEventCommand) -> Self {
        NewEvent {
            title: command.title,
            description: command.description,
            event_type: command.event_type,
            start_date: command.start_date,
            end_date: command.end_date,
            location_name: command.location_name,
            latitude: command.latitude,
            longitude: command.longitude,
            city: command.city,
            country: command.country,
            url: command.url,
        }
    }
}

#[derive(Clone)]
pub struct CreateEventHandler {
    event_dao: EventDao,
}

impl CreateEventHandler {
    pub fn new(db: MongoConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    /// Validates the command and inserts the record as-is. No document is
    /// persisted when validation fails.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateEventCommand,
    ) -> Result<CreateEventResponse, CreateEventError> {
        command.validate()?;

        let id = self.event_dao.create(command.into()).await?;
        Ok(CreateEventResponse { id })
    }
}
