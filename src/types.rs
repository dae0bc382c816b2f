//! Post data shared by the listing and single-post pages.
//!
//! Both pages fetch the same `data/posts.json` document independently; there
//! is no cache between page views.

use serde::Deserialize;

/// A blog article. Loaded verbatim from JSON and never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    /// Raw HTML body, inserted into the page unescaped.
    pub content: String,
    pub date: String,
    /// Human-readable duration such as `"5 min"`; JSON key `readTime`.
    pub read_time: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The `data/posts.json` document.
///
/// Array order is significant: posts are listed newest first, which the
/// single-post page relies on for previous/next navigation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostsDocument {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl PostsDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
