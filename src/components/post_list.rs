//! Post listing with category filter.
//!
//! Loading is split in two: the `web` module fetches `posts.data_url` and
//! hands the outcome to [`PostManager::finish_load`], which stores the posts,
//! settles the loading indicator, renders the filter buttons and the first
//! listing. Filter clicks arrive through one delegated handler on
//! `#category-filter`.

use super::{ACTIVE, HIDDEN, set_class};
use crate::config::BehaviorConfig;
use crate::dom::DomBackend;
use crate::posts::{ALL_CATEGORIES, LoadError, filter_by_category};
use crate::render;
use crate::types::{Post, PostsDocument};

const CATEGORY_BUTTON: &str = "category-btn";

pub struct PostManager<D: DomBackend> {
    container: D::Element,
    loading: Option<D::Element>,
    empty_state: Option<D::Element>,
    filter: Option<D::Element>,
    posts: Vec<Post>,
    categories: Vec<String>,
    current_category: String,
    data_url: String,
    post_page: String,
    read_suffix: String,
    load_error: String,
}

impl<D: DomBackend> PostManager<D> {
    pub fn bind(dom: &D, config: &BehaviorConfig) -> Option<Self> {
        let container = dom.element_by_id("posts-container")?;
        Some(Self {
            container,
            loading: dom.element_by_id("loading"),
            empty_state: dom.element_by_id("empty-state"),
            filter: dom.element_by_id("category-filter"),
            posts: Vec::new(),
            categories: Vec::new(),
            current_category: ALL_CATEGORIES.to_string(),
            data_url: config.posts.data_url.clone(),
            post_page: config.posts.post_page.clone(),
            read_suffix: config.messages.read_time_suffix.clone(),
            load_error: config.messages.load_error.clone(),
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Element receiving the delegated filter clicks.
    pub fn filter(&self) -> Option<&D::Element> {
        self.filter.as_ref()
    }

    pub fn current_category(&self) -> &str {
        &self.current_category
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Consume the fetch outcome, then render filters and posts.
    ///
    /// On failure the loading indicator shows the error message and the
    /// listing renders empty.
    pub fn finish_load(&mut self, dom: &D, result: Result<PostsDocument, LoadError>) {
        match result {
            Ok(document) => {
                log::info!("loaded {} posts", document.posts.len());
                self.posts = document.posts;
                self.categories = document.categories;
                if let Some(loading) = &self.loading {
                    dom.add_class(loading, HIDDEN);
                }
            }
            Err(err) => {
                log::error!("failed to load posts from {}: {err}", self.data_url);
                if let Some(loading) = &self.loading {
                    let markup = render::load_error(&self.load_error);
                    dom.set_inner_html(loading, &markup.into_string());
                }
            }
        }
        self.render_categories(dom);
        self.render_posts(dom);
    }

    /// One button per category, appended after the static "all" button.
    pub fn render_categories(&self, dom: &D) {
        let Some(filter) = &self.filter else {
            return;
        };
        for category in &self.categories {
            let Some(button) = dom.create_element("button") else {
                continue;
            };
            dom.set_attribute(&button, "class", CATEGORY_BUTTON);
            dom.set_attribute(&button, "data-category", category);
            dom.set_text(&button, category);
            dom.append_child(filter, &button);
        }
    }

    /// Delegated click on the filter bar. Returns whether the listing changed.
    pub fn on_filter_click(&mut self, dom: &D, target: &D::Element) -> bool {
        let Some(filter) = &self.filter else {
            return false;
        };
        if !dom.has_class(target, CATEGORY_BUTTON) {
            return false;
        }
        let Some(category) = dom.attribute(target, "data-category") else {
            return false;
        };
        for button in dom.query_all(Some(filter), ".category-btn") {
            dom.remove_class(&button, ACTIVE);
        }
        dom.add_class(target, ACTIVE);
        log::debug!("category filter set to {category}");
        self.current_category = category;
        self.render_posts(dom);
        true
    }

    pub fn render_posts(&self, dom: &D) {
        let visible = filter_by_category(&self.posts, &self.current_category);
        let empty = visible.is_empty();
        if let Some(empty_state) = &self.empty_state {
            set_class(dom, empty_state, HIDDEN, !empty);
        }
        let html = if empty {
            String::new()
        } else {
            render::post_cards(&visible, &self.post_page, &self.read_suffix).into_string()
        };
        dom.set_inner_html(&self.container, &html);
    }
}
