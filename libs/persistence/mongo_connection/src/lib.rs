pub use config::MongoDbConfig;
pub use connection::{MongoConnect, connect_mongo_db};
pub use mongodb;
pub use mongodb::error::Error as MongoError;

pub mod config;
mod connection;
