use axum::{
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use common_errors::AppError;
use events_commands::{CreateEventCommand, CreateEventError};
use events_queries::{ListEventsQuery, ListEventsQueryHandler};
use events_responses::{
    CreateEventResponse, EventsListResponse, StoreDiagnostics,
};
use mongo_connection::MongoConnect;
use serde::Deserialize;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 200;
pub const MAX_LIMIT: i64 = 1000;

#[derive(Clone)]
pub struct EventServices {
    pub create_event: events_commands::CreateEventHandler,
    pub list_events: ListEventsQueryHandler,
    db: MongoConnect,
}

impl EventServices {
    pub fn new(db: MongoConnect) -> Self {
        Self {
            create_event: events_commands::CreateEventHandler::new(
                db.clone(),
            ),
            list_events: ListEventsQueryHandler::new(db.clone()),
            db,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ListEventsParams {
    /// Include only events starting at or after this instant.
    pub start: Option<DateTime<Utc>>,
    /// Include only events starting at or before this instant.
    pub end: Option<DateTime<Utc>>,
    /// Comma-separated event types.
    pub types: Option<String>,
    /// Case-insensitive text search across title, description, location,
    /// city and country.
    pub q: Option<String>,
    /// Maximum result count, 1 to 1000.
    pub limit: Option<i64>,
}

/// Applies the default and the [1, 1000] bound before anything reaches the
/// query builder.
pub fn resolve_limit(limit: Option<i64>) -> Result<i64, AppError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::unprocessable_entity(
            "LIMIT_OUT_OF_RANGE",
            "limit must be between 1 and 1000",
        ));
    }
    Ok(limit)
}

#[utoipa::path(
    get,
    path = "/api/events",
    params(
        ListEventsParams
    ),
    responses(
        (status = 200, description = "Filtered events with count", body = EventsListResponse),
        (status = 422, description = "Invalid query parameters", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Document store unavailable", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_events(
    State(services): State<EventServices>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> Result<Json<EventsListResponse>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        AppError::unprocessable_entity_with_details(
            "INVALID_QUERY_PARAMS",
            "Query parameters failed to parse",
            &rejection.body_text(),
        )
    })?;

    let limit = resolve_limit(params.limit)?;
    let query = ListEventsQuery {
        start: params.start,
        end: params.end,
        types: params.types,
        q: params.q,
        limit,
    };

    let response = services
        .list_events
        .execute(query)
        .await
        .map_err(AppError::from_error)?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventCommand,
    responses(
        (status = 201, description = "Event created", body = CreateEventResponse),
        (status = 422, description = "Validation error", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Document store unavailable", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn create_event(
    State(services): State<EventServices>,
    command: Result<Json<CreateEventCommand>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateEventResponse>), AppError> {
    let Json(command) = command.map_err(|rejection| {
        AppError::unprocessable_entity_with_details(
            "INVALID_BODY",
            "Request body failed to parse",
            &rejection.body_text(),
        )
    })?;

    let response =
        services.create_event.execute(command).await.map_err(
            |err| match err {
                CreateEventError::Validation(errors) => errors.into(),
                other => AppError::from_error(other),
            },
        )?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Store connectivity report", body = StoreDiagnostics)
    ),
    tag = "health"
)]
#[instrument(skip_all)]
pub async fn store_diagnostics(
    State(services): State<EventServices>,
) -> Json<StoreDiagnostics> {
    let mut report = StoreDiagnostics {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: if std::env::var("DATABASE_URL").is_ok() {
            "✅ Set".to_string()
        }
        else {
            "❌ Not Set".to_string()
        },
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    report.database_name = Some(services.db.database_name().to_string());

    match services.db.list_collection_names().await {
        Ok(mut collections) => {
            collections.truncate(10);
            report.collections = collections;
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected".to_string();
        }
        Err(err) => {
            let message: String = err.to_string().chars().take(50).collect();
            report.database = format!("⚠️  Connected but Error: {message}");
        }
    }

    Json(report)
}
