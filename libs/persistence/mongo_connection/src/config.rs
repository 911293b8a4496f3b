/// Connection settings for the document store.
#[derive(Debug, serde::Deserialize)]
pub struct MongoDbConfig {
    pub uri: String,
    pub database: String,
    pub app_name: Option<String>,
    pub max_pool_size: Option<u32>,
}

impl MongoDbConfig {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: None,
        }
    }
}
