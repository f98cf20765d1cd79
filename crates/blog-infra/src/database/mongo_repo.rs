//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Collection, bson::doc};

use blog_core::domain::{BlogPost, TitlePrefix};
use blog_core::error::RepoError;
use blog_core::ports::{BlogPostRepository, ReplaceOutcome};

use super::connections::MongoConnection;
use super::document::{BlogPostDocument, id_filter, title_filter};

/// Blog post repository backed by a single MongoDB collection.
pub struct MongoBlogPostRepository {
    collection: Collection<BlogPostDocument>,
}

impl MongoBlogPostRepository {
    pub fn new(connection: &MongoConnection) -> Self {
        Self {
            collection: connection.collection.clone(),
        }
    }

    async fn collect(&self, filter: mongodb::bson::Document) -> Result<Vec<BlogPost>, RepoError> {
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let documents: Vec<BlogPostDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(documents.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl BlogPostRepository for MongoBlogPostRepository {
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let result = self
            .collection
            .insert_one(BlogPostDocument::from(post.clone()))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepoError::Query("inserted _id is not an ObjectId".to_string()))?;

        tracing::debug!(post_id = %id, "Inserted blog post");
        Ok(post.with_id(id.to_hex()))
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        self.collect(doc! {}).await
    }

    async fn find_by_title_prefix(
        &self,
        prefix: &TitlePrefix,
    ) -> Result<Vec<BlogPost>, RepoError> {
        tracing::debug!(pattern = %prefix.pattern(), "Finding blog posts by title prefix");
        self.collect(title_filter(prefix)).await
    }

    async fn replace(&self, id: &str, post: BlogPost) -> Result<ReplaceOutcome, RepoError> {
        let Some(filter) = id_filter(id) else {
            tracing::debug!(post_id = %id, "Malformed ObjectId, nothing to replace");
            return Ok(ReplaceOutcome::default());
        };

        let result = self
            .collection
            .replace_one(filter, BlogPostDocument::from(post))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(ReplaceOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, id: &str) -> Result<u64, RepoError> {
        let Some(filter) = id_filter(id) else {
            tracing::debug!(post_id = %id, "Malformed ObjectId, nothing to delete");
            return Ok(0);
        };

        let result = self
            .collection
            .delete_one(filter)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
