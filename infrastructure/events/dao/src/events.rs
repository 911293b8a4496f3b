use events_models::{EVENT_COLLECTION, NewEvent};
use mongo_connection::MongoConnect;
use mongodb::bson::{Bson, Document};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum EventDaoError {
    #[error("Database error: {0}")]
    Database(#[from] mongo_connection::MongoError),
}

/// Façade over the `event` collection. The only two operations this system
/// needs: insert one document, fetch matching documents.
#[derive(Clone)]
pub struct EventDao {
    db: MongoConnect,
}

impl EventDao {
    pub fn new(db: MongoConnect) -> Self { Self { db } }

    /// Inserts the event and returns the store-assigned identifier as a
    /// string.
    #[instrument(skip_all)]
    pub async fn create(
        &self, event: NewEvent,
    ) -> Result<String, EventDaoError> {
        let inserted_id = self
            .db
            .create_document(EVENT_COLLECTION, event.into_document())
            .await?;

        let id = match inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        Ok(id)
    }

    /// Fetches at most `limit` documents matching `filter`, in store-native
    /// order.
    #[instrument(skip_all, fields(limit = limit))]
    pub async fn find(
        &self, filter: Document, limit: i64,
    ) -> Result<Vec<Document>, EventDaoError> {
        let documents = self
            .db
            .get_documents(EVENT_COLLECTION, filter, limit)
            .await?;
        Ok(documents)
    }
}
