use futures::TryStreamExt;
use mongodb::{
    Client, Database,
    bson::{Bson, Document, doc},
    options::ClientOptions,
};
use tracing::{info, instrument};

use crate::config::MongoDbConfig;

/// Connects to the document store and returns a handle shared by all
/// request handlers. Called once at startup; the handle is cheap to clone
/// (the driver pools connections internally and is safe for concurrent use).
#[instrument(skip_all, name = "connect-mongodb")]
pub async fn connect_mongo_db(
    config: &MongoDbConfig,
) -> Result<MongoConnect, anyhow::Error> {
    info!(
        mongodb.database = %config.database,
        mongodb.max_pool_size = ?config.max_pool_size,
    );

    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = config.app_name.clone();
    if let Some(max_pool_size) = config.max_pool_size {
        options.max_pool_size = Some(max_pool_size);
    }

    let client = Client::with_options(options)?;
    let db = client.database(&config.database);

    info!("MongoDB client initialized for database `{}`", db.name());

    Ok(MongoConnect { client, db })
}

/// Handle on the store connection. The sole point of contact with
/// persistent storage: documents go in through [`create_document`] and come
/// out through [`get_documents`].
///
/// [`create_document`]: MongoConnect::create_document
/// [`get_documents`]: MongoConnect::get_documents
#[derive(Debug, Clone)]
pub struct MongoConnect {
    client: Client,
    db: Database,
}

impl MongoConnect {
    pub fn database_name(&self) -> &str { self.db.name() }

    /// Inserts one document and returns the store-assigned identifier.
    /// Stamps `created_at`/`updated_at` if the caller did not set them.
    #[instrument(skip_all, fields(collection = collection))]
    pub async fn create_document(
        &self, collection: &str, mut document: Document,
    ) -> Result<Bson, mongodb::error::Error> {
        let now = mongodb::bson::DateTime::now();
        if !document.contains_key("created_at") {
            document.insert("created_at", now);
        }
        if !document.contains_key("updated_at") {
            document.insert("updated_at", now);
        }

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(result.inserted_id)
    }

    /// Fetches at most `limit` documents matching `filter`, in store-native
    /// order (no sort stage is applied).
    #[instrument(skip_all, fields(collection = collection, limit = limit))]
    pub async fn get_documents(
        &self, collection: &str, filter: Document, limit: i64,
    ) -> Result<Vec<Document>, mongodb::error::Error> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await?;
        cursor.try_collect().await
    }

    pub async fn list_collection_names(
        &self,
    ) -> Result<Vec<String>, mongodb::error::Error> {
        self.db.list_collection_names().await
    }

    /// Round-trips a `ping` command to verify the server is reachable.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn client(&self) -> &Client { &self.client }
}
