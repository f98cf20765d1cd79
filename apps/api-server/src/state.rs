//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::RepoError;
use blog_core::ports::BlogPostRepository;
use blog_infra::InMemoryBlogPostRepository;

#[cfg(feature = "mongo")]
use blog_infra::{MongoBlogPostRepository, MongoConnection};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    /// Skip escaping title search text (see `TitlePrefix::raw`).
    pub raw_title_pattern: bool,
}

impl AppState {
    pub fn with_repository(posts: Arc<dyn BlogPostRepository>, raw_title_pattern: bool) -> Self {
        Self {
            posts,
            raw_title_pattern,
        }
    }

    /// Build the application state with the appropriate repository.
    ///
    /// A configured database is always used, reachable or not; the in-memory
    /// store only backs a server started without a connection string. Fails
    /// when the connection string cannot be parsed.
    pub async fn new(config: &AppConfig) -> Result<Self, RepoError> {
        #[cfg(feature = "mongo")]
        let posts: Arc<dyn BlogPostRepository> = {
            if let Some(db_config) = &config.database {
                let connection = MongoConnection::connect(db_config).await?;
                match connection.ping().await {
                    Ok(()) => tracing::info!("MongoDB connected"),
                    Err(e) => tracing::error!(
                        "MongoDB is not reachable yet: {}. Requests will fail until it is.",
                        e
                    ),
                }
                Arc::new(MongoBlogPostRepository::new(&connection))
            } else {
                tracing::warn!(
                    "BLOG_DATABASE_CONNECTION_STRING not set. Running without database (in-memory mode)."
                );
                Arc::new(InMemoryBlogPostRepository::new())
            }
        };

        #[cfg(not(feature = "mongo"))]
        let posts: Arc<dyn BlogPostRepository> = {
            if config.database.is_some() {
                tracing::warn!("Built without mongo feature - ignoring database configuration");
            }
            tracing::info!("Using in-memory repository");
            Arc::new(InMemoryBlogPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(posts, config.raw_title_pattern))
    }
}
