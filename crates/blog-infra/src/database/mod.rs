//! Blog post storage: connection bootstrap and repositories.

mod connections;
mod memory;

#[cfg(feature = "mongo")]
mod document;
#[cfg(feature = "mongo")]
mod mongo_repo;

pub use connections::DatabaseConfig;
pub use memory::InMemoryBlogPostRepository;

#[cfg(feature = "mongo")]
pub use connections::MongoConnection;
#[cfg(feature = "mongo")]
pub use document::BlogPostDocument;
#[cfg(feature = "mongo")]
pub use mongo_repo::MongoBlogPostRepository;
