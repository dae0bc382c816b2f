//! Post collection queries: category filtering, id lookup, neighbors and
//! related posts, plus the `?id=` query parameter parser.
//!
//! Everything here is a pure function over a slice of [`Post`]s in document
//! order; the components in [`crate::components`] decide what to do with the
//! results.

use crate::types::Post;
use thiserror::Error;

/// Filter value that matches every post.
pub const ALL_CATEGORIES: &str = "all";

/// Emoji shown on a card's banner for unmapped categories.
pub const DEFAULT_EMOJI: &str = "📝";

/// Failure while fetching or decoding the posts document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid posts document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Posts whose category equals `category` exactly, or all of them for
/// [`ALL_CATEGORIES`]. Order is preserved.
pub fn filter_by_category<'a>(posts: &'a [Post], category: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

/// Banner glyph for a category. Lookup is by exact string.
pub fn category_emoji(category: &str) -> &'static str {
    match category {
        "JavaScript" => "💛",
        "CSS" => "💙",
        "React" => "⚛️",
        "Tooling" => "🛠️",
        "Performance" => "⚡",
        "TypeScript" => "💙",
        _ => DEFAULT_EMOJI,
    }
}

/// Find a post's position by id.
pub fn position_of(posts: &[Post], id: u32) -> Option<usize> {
    posts.iter().position(|p| p.id == id)
}

/// Adjacent posts around the one at `index`.
///
/// The document lists posts newest first, so the *previous* (older) post is
/// the one after `index` and the *next* (newer) post is the one before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a Post>,
    pub next: Option<&'a Post>,
}

pub fn neighbors(posts: &[Post], index: usize) -> Neighbors<'_> {
    Neighbors {
        previous: posts.get(index + 1),
        next: index.checked_sub(1).and_then(|i| posts.get(i)),
    }
}

/// Up to `limit` other posts in the same category, in document order.
pub fn related<'a>(posts: &'a [Post], current: &Post, limit: usize) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.id != current.id && p.category == current.category)
        .take(limit)
        .collect()
}

/// Value of a query parameter from a `location.search` string.
///
/// Accepts the string with or without its leading `?`. Values are
/// percent-decoded and `+` is read as a space. Returns the first occurrence.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value))
        })
        .next()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Post id from the page's query string.
///
/// Mirrors `parseInt`: leading whitespace and an optional sign are skipped and
/// the leading run of digits is used (`"12abc"` → 12). Missing, non-numeric,
/// zero and negative values yield `None`.
pub fn parse_post_id(search: &str) -> Option<u32> {
    let raw = query_param(search, "id")?;
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: u32 = digits[..end].parse().ok()?;
    if negative || value == 0 {
        return None;
    }
    Some(value)
}

/// Link to a post on the single-post page.
pub fn post_href(post_page: &str, id: u32) -> String {
    format!("{post_page}?id={id}")
}
