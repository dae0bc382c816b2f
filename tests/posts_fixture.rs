//! Checks the demo `posts.json` against the listing and post-page logic.
//!
//! The demo pages are what the browser tests load, so the fixture has to
//! satisfy the same assumptions the components make about real data.

use pagewire::posts::{self, ALL_CATEGORIES};
use pagewire::render;
use pagewire::types::PostsDocument;
use std::collections::HashSet;
use std::path::PathBuf;

fn fixture() -> PostsDocument {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/blog/data/posts.json");
    let json = std::fs::read_to_string(&path).expect("demo posts.json missing");
    PostsDocument::from_json(&json).expect("demo posts.json does not parse")
}

#[test]
fn ids_are_unique_and_positive() {
    let doc = fixture();
    let ids: HashSet<u32> = doc.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), doc.posts.len());
    assert!(!ids.contains(&0));
}

#[test]
fn posts_are_listed_newest_first() {
    let doc = fixture();
    let dates: Vec<&str> = doc.posts.iter().map(|p| p.date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[test]
fn every_post_category_is_declared() {
    let doc = fixture();
    for post in &doc.posts {
        assert!(
            doc.categories.contains(&post.category),
            "post {} has undeclared category {}",
            post.id,
            post.category
        );
    }
}

#[test]
fn category_filters_partition_the_posts() {
    let doc = fixture();
    let total: usize = doc
        .categories
        .iter()
        .map(|c| posts::filter_by_category(&doc.posts, c).len())
        .sum();
    assert_eq!(total, doc.posts.len());
    assert_eq!(
        posts::filter_by_category(&doc.posts, ALL_CATEGORIES).len(),
        doc.posts.len()
    );
}

#[test]
fn only_the_ends_lack_a_neighbor() {
    let doc = fixture();
    let last = doc.posts.len() - 1;
    for index in 0..doc.posts.len() {
        let n = posts::neighbors(&doc.posts, index);
        assert_eq!(n.next.is_none(), index == 0, "index {index}");
        assert_eq!(n.previous.is_none(), index == last, "index {index}");
    }
}

#[test]
fn related_posts_never_include_the_current_one() {
    let doc = fixture();
    for post in &doc.posts {
        let related = posts::related(&doc.posts, post, 3);
        assert!(related.iter().all(|r| r.id != post.id));
        assert!(related.iter().all(|r| r.category == post.category));
    }
}

#[test]
fn cards_link_to_every_post() {
    let doc = fixture();
    let all: Vec<_> = doc.posts.iter().collect();
    let html = render::post_cards(&all, "post.html", "read").into_string();
    for post in &doc.posts {
        assert!(html.contains(&format!("post.html?id={}", post.id)));
    }
}
