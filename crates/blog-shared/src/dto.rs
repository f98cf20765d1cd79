//! Data Transfer Objects - request/response types for the API.

use blog_core::domain::BlogPost;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /blogposts` and `PUT /blogposts/{id}`.
///
/// Every field except `id` is required. An `id` sent by the client is
/// accepted but never used to address a document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(alias = "imageURL")]
    pub image_url: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl From<BlogPostRequest> for BlogPost {
    fn from(req: BlogPostRequest) -> Self {
        BlogPost::new(
            req.title,
            req.description,
            req.image_url,
            req.tags,
            req.content,
        )
    }
}

/// A stored blog post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            image_url: post.image_url,
            tags: post.tags,
            content: post.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_both_image_url_spellings() {
        let camel: BlogPostRequest = serde_json::from_str(
            r#"{"title":"A","description":"d","imageUrl":"u","tags":["x"],"content":"c"}"#,
        )
        .unwrap();
        let dotnet: BlogPostRequest = serde_json::from_str(
            r#"{"title":"A","description":"d","imageURL":"u","tags":["x"],"content":"c"}"#,
        )
        .unwrap();

        assert_eq!(camel.image_url, "u");
        assert_eq!(dotnet.image_url, "u");
        assert!(camel.id.is_none());
    }

    #[test]
    fn test_request_requires_fields() {
        let missing_tags = serde_json::from_str::<BlogPostRequest>(
            r#"{"title":"A","description":"d","imageUrl":"u","content":"c"}"#,
        );
        assert!(missing_tags.is_err());
    }

    #[test]
    fn test_request_id_is_dropped_on_conversion() {
        let req: BlogPostRequest = serde_json::from_str(
            r#"{"id":"ffff","title":"A","description":"d","imageUrl":"u","tags":[],"content":"c"}"#,
        )
        .unwrap();
        let post = BlogPost::from(req);
        assert!(post.id.is_none());
        assert_eq!(post.title, "A");
    }

    #[test]
    fn test_response_uses_camel_case_and_omits_missing_id() {
        let post = BlogPost::new(
            "A".into(),
            "d".into(),
            "u".into(),
            vec!["x".into()],
            "c".into(),
        );
        let json = serde_json::to_value(BlogPostResponse::from(post.clone())).unwrap();
        assert_eq!(json["imageUrl"], "u");
        assert!(json.get("id").is_none());

        let json = serde_json::to_value(BlogPostResponse::from(post.with_id("42"))).unwrap();
        assert_eq!(json["id"], "42");
    }
}
