use std::net::SocketAddr;

use axum::{
    Router,
    response::Json,
    routing::{get, post},
};
use events_http::EventServices;
use mongo_connection::{MongoDbConfig, connect_mongo_db};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Initializing document store connection...");

    let db_config = MongoDbConfig {
        uri: std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        database: std::env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "christian_events".to_string()),
        app_name: Some("christian-events".to_string()),
        max_pool_size: Some(20),
    };

    let db = connect_mongo_db(&db_config).await?;

    // The driver connects lazily; ping now so startup logs show whether the
    // store is actually reachable. The server starts either way and the
    // /test endpoint keeps reporting.
    match db.ping().await {
        Ok(()) => info!("Document store reachable"),
        Err(e) => warn!("Document store not reachable yet: {}", e),
    }

    let event_services = EventServices::new(db);

    let app = Router::new()
        .route("/", get(read_root))
        .route("/test", get(events_http::store_diagnostics))
        .route("/api/events", get(events_http::list_events))
        .route("/api/events", post(events_http::create_event))
        .with_state(event_services);

    let app = app
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("🚀 Christian Events API starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        read_root,
        events_http::list_events,
        events_http::create_event,
        events_http::store_diagnostics,
    ),
    components(
        schemas(
            events_commands::CreateEventCommand,
            events_responses::EventsListResponse,
            events_responses::CreateEventResponse,
            events_responses::StoreDiagnostics,
            common_errors::ApiErrorResponse,
            RootMessage,
        )
    ),
    tags(
        (name = "health", description = "Liveness and store diagnostics"),
        (name = "events", description = "Christian event listing and creation")
    ),
    info(
        title = "Christian Events API",
        description = "Calendar of Christian gatherings: worship nights, conferences, retreats, concerts and more",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[derive(serde::Serialize, utoipa::ToSchema)]
struct RootMessage {
    message: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness marker", body = RootMessage)
    ),
    tag = "health"
)]
async fn read_root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Christian Events API running".to_string(),
    })
}
