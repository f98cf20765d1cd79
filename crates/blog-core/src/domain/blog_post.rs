use serde::{Deserialize, Serialize};

/// BlogPost entity - the only document kept in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Assigned by the store on insert, `None` until then.
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl BlogPost {
    /// Create a post that has not been stored yet.
    pub fn new(
        title: String,
        description: String,
        image_url: String,
        tags: Vec<String>,
        content: String,
    ) -> Self {
        Self {
            id: None,
            title,
            description,
            image_url,
            tags,
            content,
        }
    }

    /// Return the same post addressed by `id`.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether both posts carry the same fields, ignoring the identifier.
    pub fn same_content(&self, other: &BlogPost) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.image_url == other.image_url
            && self.tags == other.tags
            && self.content == other.content
    }
}
