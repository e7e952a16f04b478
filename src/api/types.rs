use base64::Engine;
use serde::Deserialize;

/// Categories offered by the compose form. The backend stores free text;
/// the client only ever submits one of these.
pub const CATEGORIES: [&str; 8] = [
    "Technology",
    "Lifestyle",
    "Travel",
    "Food",
    "Finance",
    "Sports",
    "Health",
    "Business",
];

/// A published blog post as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: String,
    pub category: String,
    /// Content type of the featured image (e.g., "image/png").
    pub content_type: String,
    /// Featured image payload, base64 over the wire.
    pub image_base64: String,
}

impl Post {
    /// Decoded size of the featured image. A terminal can't show the image
    /// itself, so the card shows its size instead.
    pub fn image_size_bytes(&self) -> usize {
        base64::engine::general_purpose::STANDARD
            .decode(self.image_base64.as_bytes())
            .map(|bytes| bytes.len())
            .unwrap_or(0)
    }
}

/// Single-post read payload: the post plus whether the current viewer has
/// liked it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithLike {
    pub blog: Post,
    pub is_liked: bool,
}

/// Feed payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PostList {
    pub blogs: Vec<Post>,
}

/// Draft of a new post, submitted as one multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    /// Path to the featured image on the local filesystem.
    pub image_path: String,
}
