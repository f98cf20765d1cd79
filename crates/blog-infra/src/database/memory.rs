//! In-memory blog post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, TitlePrefix};
use blog_core::error::RepoError;
use blog_core::ports::{BlogPostRepository, ReplaceOutcome};

/// Blog posts kept in insertion order behind an async RwLock.
///
/// Mirrors the document store's counting rules: a replace with identical
/// content matches but does not modify.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let stored = post.with_id(Uuid::new_v4().simple().to_string());
        self.posts.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_title_prefix(
        &self,
        prefix: &TitlePrefix,
    ) -> Result<Vec<BlogPost>, RepoError> {
        let re = prefix.to_regex()?;
        let posts = self.posts.read().await;

        Ok(posts
            .iter()
            .filter(|post| re.is_match(&post.title))
            .cloned()
            .collect())
    }

    async fn replace(&self, id: &str, post: BlogPost) -> Result<ReplaceOutcome, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(existing) = posts.iter_mut().find(|p| p.id.as_deref() == Some(id)) else {
            return Ok(ReplaceOutcome::default());
        };

        if existing.same_content(&post) {
            return Ok(ReplaceOutcome {
                matched: 1,
                modified: 0,
            });
        }

        *existing = post.with_id(id);
        Ok(ReplaceOutcome {
            matched: 1,
            modified: 1,
        })
    }

    async fn delete(&self, id: &str) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id.as_deref() != Some(id));
        Ok((before - posts.len()) as u64)
    }
}
