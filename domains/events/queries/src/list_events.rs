use chrono::{DateTime, Utc};
use events_dao::EventDao;
use events_responses::EventsListResponse;
use mongo_connection::MongoConnect;
use mongodb::bson::{self, Document, doc};
use thiserror::Error;
use tracing::instrument;

use crate::normalize::normalize_document;

#[derive(Debug, Error)]
pub enum ListEventsError {
    #[error("DAO error: {0}")]
    Dao(#[from] events_dao::EventDaoError),
}

/// Listing parameters after boundary validation. Every filter is optional;
/// `limit` arrives already range-checked and is passed through to the store
/// unmodified.
#[derive(Debug)]
pub struct ListEventsQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub types: Option<String>,
    pub q: Option<String>,
    pub limit: i64,
}

/// Fields searched by the free-text `q` parameter.
const TEXT_SEARCH_FIELDS: [&str; 5] =
    ["title", "description", "location_name", "city", "country"];

/// Translates the listing parameters into one store filter document.
///
/// Sibling keys of the resulting document combine by AND; the free-text
/// search is an `$or` across the text fields, nested as one such sibling.
pub fn build_filter(query: &ListEventsQuery) -> Document {
    let mut filter = Document::new();

    // Type filter: comma-separated, whitespace-trimmed, empties dropped.
    // An all-empty list is silently ignored, not an error.
    if let Some(types) = &query.types {
        let type_list: Vec<&str> = types
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if !type_list.is_empty() {
            filter.insert("type", doc! { "$in": type_list });
        }
    }

    // Date range on start_date, both bounds inclusive.
    if query.start.is_some() || query.end.is_some() {
        let mut date_filter = Document::new();
        if let Some(start) = query.start {
            date_filter.insert("$gte", bson::DateTime::from_chrono(start));
        }
        if let Some(end) = query.end {
            date_filter.insert("$lte", bson::DateTime::from_chrono(end));
        }
        filter.insert("start_date", date_filter);
    }

    // Case-insensitive contains across the text fields. The term is passed
    // as a raw pattern, matching the behavior this endpoint has always had.
    if let Some(q) = &query.q {
        let clauses: Vec<Document> = TEXT_SEARCH_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(
                    *field,
                    doc! { "$regex": q.as_str(), "$options": "i" },
                );
                clause
            })
            .collect();
        filter.insert("$or", clauses);
    }

    filter
}

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    event_dao: EventDao,
}

impl ListEventsQueryHandler {
    pub fn new(db: MongoConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    /// Builds the filter, fetches at most `limit` documents in store-native
    /// order, and normalizes each into its JSON-safe client shape. An empty
    /// result set is a normal response, not an error.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: ListEventsQuery,
    ) -> Result<EventsListResponse, ListEventsError> {
        let filter = build_filter(&query);
        let documents = self.event_dao.find(filter, query.limit).await?;

        let items: Vec<serde_json::Value> =
            documents.into_iter().map(normalize_document).collect();
        let count = items.len();

        Ok(EventsListResponse { items, count })
    }
}
