#[cfg(feature = "mongo")]
use mongodb::{Client, Collection, bson::doc};

#[cfg(feature = "mongo")]
use blog_core::RepoError;

#[cfg(feature = "mongo")]
use super::document::BlogPostDocument;

/// Where the blog post collection lives.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub database_name: String,
    pub collection_name: String,
}

/// Long-lived MongoDB client bound to the blog post collection.
///
/// The driver pools connections internally, so one instance is created at
/// startup and shared by every request.
#[cfg(feature = "mongo")]
#[derive(Clone)]
pub struct MongoConnection {
    pub client: Client,
    pub collection: Collection<BlogPostDocument>,
}

#[cfg(feature = "mongo")]
impl MongoConnection {
    /// Build the client and bind the collection.
    ///
    /// Only the connection string is validated here; the driver opens
    /// sockets lazily, so an unreachable server surfaces on the first
    /// operation rather than at startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!(
            database = %config.database_name,
            collection = %config.collection_name,
            "Initializing MongoDB connection..."
        );

        let client = Client::with_uri_str(&config.connection_string)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let collection = client
            .database(&config.database_name)
            .collection::<BlogPostDocument>(&config.collection_name);

        Ok(Self { client, collection })
    }

    /// Round-trip a `ping` to the server holding the collection.
    pub async fn ping(&self) -> Result<(), RepoError> {
        self.client
            .database(self.collection.namespace().db.as_str())
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}
