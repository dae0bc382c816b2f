//! Single-post view.
//!
//! The page is driven by the `?id=` query parameter:
//!
//! 1. [`PostPage::requested_id`] parses it; a missing or invalid id sends the
//!    visitor back to the index page.
//! 2. The `web` module fetches the posts document and calls
//!    [`PostPage::finish_load`], which looks the post up and renders it, or
//!    redirects when the id is unknown.
//!
//! Only `#post-content` is required. Every other slot is filled when present.

use super::HIDDEN;
use crate::config::PostsConfig;
use crate::dom::DomBackend;
use crate::posts::{self, LoadError};
use crate::render::{self, MetaIcon};
use crate::types::{Post, PostsDocument};

/// A navigation control and the element holding its label.
struct NavSlot<E> {
    link: E,
    title: Option<E>,
}

pub struct PostPage<D: DomBackend> {
    content: D::Element,
    title: Option<D::Element>,
    category: Option<D::Element>,
    author: Option<D::Element>,
    date: Option<D::Element>,
    read_time: Option<D::Element>,
    tags: Option<D::Element>,
    previous: Option<NavSlot<D::Element>>,
    next: Option<NavSlot<D::Element>>,
    related: Option<D::Element>,
    config: PostsConfig,
}

impl<D: DomBackend> PostPage<D> {
    pub fn bind(dom: &D, config: &PostsConfig) -> Option<Self> {
        let content = dom.element_by_id("post-content")?;
        let slot = |id: &str| {
            dom.element_by_id(id).map(|link| NavSlot {
                link,
                title: dom.element_by_id(&format!("{id}-title")),
            })
        };
        Some(Self {
            content,
            title: dom.element_by_id("post-title"),
            category: dom.element_by_id("post-category"),
            author: dom.element_by_id("post-author"),
            date: dom.element_by_id("post-date"),
            read_time: dom.element_by_id("post-readtime"),
            tags: dom.element_by_id("post-tags"),
            previous: slot("prev-post"),
            next: slot("next-post"),
            related: dom.element_by_id("related-posts"),
            config: config.clone(),
        })
    }

    pub fn data_url(&self) -> &str {
        &self.config.data_url
    }

    /// Post id from the current URL. Redirects to the index page and returns
    /// `None` when it is missing or invalid.
    pub fn requested_id(&self, dom: &D) -> Option<u32> {
        let id = posts::parse_post_id(&dom.location_search());
        if id.is_none() {
            log::warn!("no valid post id in URL, redirecting");
            dom.navigate(&self.config.index_page);
        }
        id
    }

    pub fn finish_load(&self, dom: &D, id: u32, result: Result<PostsDocument, LoadError>) {
        let document = match result {
            Ok(document) => document,
            Err(err) => {
                log::error!("failed to load post {id} from {}: {err}", self.config.data_url);
                return;
            }
        };
        let Some(index) = posts::position_of(&document.posts, id) else {
            log::warn!("post {id} not found, redirecting");
            dom.navigate(&self.config.index_page);
            return;
        };
        let post = &document.posts[index];
        self.render_post(dom, post);
        self.render_navigation(dom, &document.posts, index);
        self.render_related(dom, &document.posts, post);
    }

    pub fn render_post(&self, dom: &D, post: &Post) {
        dom.set_title(&format!("{} | {}", post.title, self.config.site_title));
        let text_slots = [(&self.title, &post.title), (&self.category, &post.category)];
        for (slot, value) in text_slots {
            if let Some(el) = slot {
                dom.set_text(el, value);
            }
        }
        let meta_slots = [
            (&self.author, MetaIcon::Author, &post.author),
            (&self.date, MetaIcon::Date, &post.date),
            (&self.read_time, MetaIcon::ReadTime, &post.read_time),
        ];
        for (slot, icon, value) in meta_slots {
            if let Some(el) = slot {
                dom.set_inner_html(el, &render::meta_line(icon, value).into_string());
            }
        }
        if let Some(el) = &self.tags {
            dom.set_inner_html(el, &render::tag_list(&post.tags).into_string());
        }
        dom.set_inner_html(&self.content, &render::post_content(post).into_string());
    }

    pub fn render_navigation(&self, dom: &D, all: &[Post], index: usize) {
        let neighbors = posts::neighbors(all, index);
        for (slot, neighbor) in [(&self.previous, neighbors.previous), (&self.next, neighbors.next)] {
            let (Some(slot), Some(neighbor)) = (slot, neighbor) else {
                continue;
            };
            dom.set_attribute(
                &slot.link,
                "href",
                &posts::post_href(&self.config.post_page, neighbor.id),
            );
            if let Some(title) = &slot.title {
                dom.set_text(title, &neighbor.title);
            }
            dom.remove_class(&slot.link, HIDDEN);
        }
    }

    /// Related cards, or hide the enclosing section when there are none.
    pub fn render_related(&self, dom: &D, all: &[Post], post: &Post) {
        let Some(container) = &self.related else {
            return;
        };
        let related = posts::related(all, post, self.config.related_limit);
        if related.is_empty() {
            if let Some(section) = dom.parent(container) {
                dom.add_class(&section, HIDDEN);
            }
            return;
        }
        let markup = render::related_cards(&related, &self.config.post_page);
        dom.set_inner_html(container, &markup.into_string());
    }
}
