use serde::Serialize;
use utoipa::ToSchema;

/// Listing payload: normalized documents plus their count.
///
/// Items are JSON objects rather than a fixed struct: the store is
/// schema-less and every field other than `id` and the known timestamp
/// fields passes through unchanged.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventsListResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<serde_json::Value>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateEventResponse {
    pub id: String,
}

/// Connectivity report served by the diagnostic endpoint. Every field is a
/// human-readable status string; the endpoint never fails.
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreDiagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}
