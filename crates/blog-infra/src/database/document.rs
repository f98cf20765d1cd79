//! BlogPost document layout for MongoDB.
//!
//! Field names follow what the .NET driver wrote for the original service
//! (`Title`, `ImageURL`, ...) so existing collections stay readable.

use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use blog_core::domain::{BlogPost, TitlePrefix};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "ImageURL")]
    pub image_url: String,
    #[serde(rename = "Tags")]
    pub tags: Vec<String>,
    #[serde(rename = "Content")]
    pub content: String,
}

/// Conversion from stored document to domain BlogPost.
impl From<BlogPostDocument> for BlogPost {
    fn from(document: BlogPostDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()),
            title: document.title,
            description: document.description,
            image_url: document.image_url,
            tags: document.tags,
            content: document.content,
        }
    }
}

/// Conversion from domain BlogPost to a document without `_id`; the server
/// assigns it on insert and keeps the existing one on replace.
impl From<BlogPost> for BlogPostDocument {
    fn from(post: BlogPost) -> Self {
        Self {
            id: None,
            title: post.title,
            description: post.description,
            image_url: post.image_url,
            tags: post.tags,
            content: post.content,
        }
    }
}

/// `{ _id: ObjectId(id) }`, or `None` when `id` is not a valid ObjectId.
pub(crate) fn id_filter(id: &str) -> Option<Document> {
    ObjectId::parse_str(id).ok().map(|oid| doc! { "_id": oid })
}

/// Case-insensitive regex filter on the title field.
pub(crate) fn title_filter(prefix: &TitlePrefix) -> Document {
    doc! { "Title": { "$regex": prefix.pattern(), "$options": "i" } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample() -> BlogPost {
        BlogPost::new(
            "Hello World".into(),
            "d".into(),
            "https://img/1.png".into(),
            vec!["rust".into(), "mongo".into()],
            "body".into(),
        )
    }

    #[test]
    fn test_new_document_has_no_id_field() {
        let document = BlogPostDocument::from(sample().with_id("ignored"));
        let bson_doc = bson::to_document(&document).unwrap();

        assert!(!bson_doc.contains_key("_id"));
        assert_eq!(bson_doc.get_str("Title").unwrap(), "Hello World");
        assert_eq!(bson_doc.get_str("ImageURL").unwrap(), "https://img/1.png");
        assert_eq!(bson_doc.get_array("Tags").unwrap().len(), 2);
    }

    #[test]
    fn test_stored_document_maps_object_id_to_hex() {
        let oid = ObjectId::new();
        let stored = doc! {
            "_id": oid,
            "Title": "Hello World",
            "Description": "d",
            "ImageURL": "u",
            "Tags": ["x"],
            "Content": "c",
        };

        let document: BlogPostDocument = bson::from_document(stored).unwrap();
        let post = BlogPost::from(document);

        assert_eq!(post.id, Some(oid.to_hex()));
        assert_eq!(post.tags, vec!["x".to_string()]);
    }

    #[test]
    fn test_id_filter_rejects_malformed_ids() {
        assert!(id_filter("not-an-object-id").is_none());

        let oid = ObjectId::new();
        let filter = id_filter(&oid.to_hex()).unwrap();
        assert_eq!(filter.get_object_id("_id").unwrap(), oid);
    }

    #[test]
    fn test_title_filter_is_anchored_and_case_insensitive() {
        let filter = title_filter(&TitlePrefix::escaped("a.b"));
        let title = filter.get_document("Title").unwrap();

        assert_eq!(title.get_str("$regex").unwrap(), r"^a\.b");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }
}
