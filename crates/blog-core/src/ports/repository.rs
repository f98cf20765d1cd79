use async_trait::async_trait;

use crate::domain::{BlogPost, TitlePrefix};
use crate::error::RepoError;

/// Counts reported by a full-document replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    /// Documents whose identifier matched.
    pub matched: u64,
    /// Documents whose stored content actually changed.
    pub modified: u64,
}

impl ReplaceOutcome {
    pub fn is_modified(&self) -> bool {
        self.modified > 0
    }
}

/// Blog post collection accessor.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Insert a new post and return it with the store-assigned id.
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Every post, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Posts whose title starts with the prefix, ignoring case.
    async fn find_by_title_prefix(&self, prefix: &TitlePrefix)
    -> Result<Vec<BlogPost>, RepoError>;

    /// Overwrite the whole document addressed by `id`. The `id` carried by
    /// `post` is ignored.
    async fn replace(&self, id: &str, post: BlogPost) -> Result<ReplaceOutcome, RepoError>;

    /// Remove the document addressed by `id`, returning how many were deleted.
    async fn delete(&self, id: &str) -> Result<u64, RepoError>;
}
