//! End-to-end round-trips against a live MongoDB. Run with a store
//! available:
//!
//! ```text
//! DATABASE_URL=mongodb://localhost:27017 cargo test -p christian-events -- --ignored
//! ```

use chrono::{DateTime, TimeZone, Utc};
use events_commands::{CreateEventCommand, CreateEventHandler};
use events_models::EventType;
use events_queries::{ListEventsQuery, ListEventsQueryHandler};
use mongo_connection::{MongoConnect, MongoDbConfig, connect_mongo_db};
use mongodb::bson::oid::ObjectId;

struct TestDb {
    db: MongoConnect,
    name: String,
}

impl TestDb {
    async fn new() -> anyhow::Result<Self> {
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let name = format!("christian_events_test_{}", ObjectId::new());
        let config = MongoDbConfig::new(uri, name.clone());
        let db = connect_mongo_db(&config).await?;
        Ok(Self { db, name })
    }

    async fn drop(self) {
        let _ = self.db.client().database(&self.name).drop().await;
    }
}

fn command(
    title: &str, event_type: EventType, start: DateTime<Utc>,
) -> CreateEventCommand {
    CreateEventCommand {
        title: title.to_string(),
        description: None,
        event_type,
        start_date: start,
        end_date: None,
        location_name: None,
        latitude: 40.0,
        longitude: -74.0,
        city: None,
        country: None,
        url: None,
    }
}

fn unfiltered(limit: i64) -> ListEventsQuery {
    ListEventsQuery {
        start: None,
        end: None,
        types: None,
        q: None,
        limit,
    }
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn created_event_appears_in_unfiltered_list_with_string_id() {
    let test_db = TestDb::new().await.unwrap();
    let create = CreateEventHandler::new(test_db.db.clone());
    let list = ListEventsQueryHandler::new(test_db.db.clone());

    let start = Utc.with_ymd_and_hms(2025, 4, 20, 6, 0, 0).unwrap();
    let created = create
        .execute(command("Sunrise Service", EventType::Service, start))
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    let response = list.execute(unfiltered(200)).await.unwrap();
    assert_eq!(response.count, 1);

    let item = &response.items[0];
    assert_eq!(item["id"], serde_json::json!(created.id));
    assert!(item["id"].is_string());
    assert_eq!(
        item["start_date"],
        serde_json::json!("2025-04-20T06:00:00+00:00")
    );
    assert!(item["created_at"].is_string());
    assert!(item["updated_at"].is_string());

    test_db.drop().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn type_filter_includes_and_excludes() {
    let test_db = TestDb::new().await.unwrap();
    let create = CreateEventHandler::new(test_db.db.clone());
    let list = ListEventsQueryHandler::new(test_db.db.clone());

    let start = Utc.with_ymd_and_hms(2025, 6, 1, 19, 0, 0).unwrap();
    create
        .execute(command("Downtown Praise", EventType::Concert, start))
        .await
        .unwrap();

    let concerts = list
        .execute(ListEventsQuery {
            types: Some("concert".to_string()),
            ..unfiltered(200)
        })
        .await
        .unwrap();
    assert_eq!(concerts.count, 1);

    let worship = list
        .execute(ListEventsQuery {
            types: Some("worship".to_string()),
            ..unfiltered(200)
        })
        .await
        .unwrap();
    assert_eq!(worship.count, 0);

    test_db.drop().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn start_bound_is_inclusive() {
    let test_db = TestDb::new().await.unwrap();
    let create = CreateEventHandler::new(test_db.db.clone());
    let list = ListEventsQueryHandler::new(test_db.db.clone());

    let start = Utc.with_ymd_and_hms(2025, 4, 20, 6, 0, 0).unwrap();
    create
        .execute(command("Sunrise Service", EventType::Service, start))
        .await
        .unwrap();

    let at_start = list
        .execute(ListEventsQuery {
            start: Some(start),
            ..unfiltered(200)
        })
        .await
        .unwrap();
    assert_eq!(at_start.count, 1);

    let one_second_later = list
        .execute(ListEventsQuery {
            start: Some(start + chrono::Duration::seconds(1)),
            ..unfiltered(200)
        })
        .await
        .unwrap();
    assert_eq!(one_second_later.count, 0);

    test_db.drop().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn free_text_search_is_case_insensitive() {
    let test_db = TestDb::new().await.unwrap();
    let create = CreateEventHandler::new(test_db.db.clone());
    let list = ListEventsQueryHandler::new(test_db.db.clone());

    let start = Utc.with_ymd_and_hms(2025, 7, 1, 18, 0, 0).unwrap();
    create
        .execute(command("Youth Night", EventType::Youth, start))
        .await
        .unwrap();

    for term in ["youth", "YOUTH"] {
        let response = list
            .execute(ListEventsQuery {
                q: Some(term.to_string()),
                ..unfiltered(200)
            })
            .await
            .unwrap();
        assert_eq!(response.count, 1, "term {term:?} should match");
    }

    test_db.drop().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn limit_caps_the_result_count() {
    let test_db = TestDb::new().await.unwrap();
    let create = CreateEventHandler::new(test_db.db.clone());
    let list = ListEventsQueryHandler::new(test_db.db.clone());

    let start = Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap();
    for i in 0..5 {
        create
            .execute(command(
                &format!("Gathering {i}"),
                EventType::Other,
                start,
            ))
            .await
            .unwrap();
    }

    let response = list.execute(unfiltered(3)).await.unwrap();
    assert_eq!(response.count, 3);
    assert_eq!(response.items.len(), 3);

    test_db.drop().await;
}
