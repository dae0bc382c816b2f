//! Shared test utilities for the pagewire test suite.
//!
//! Provides post fixtures, bulk extractors, and [`MockDom`] page skeletons
//! carrying the element ids each component binds to.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let page = blog_index_page();
//! let mut manager = PostManager::bind(&page.dom, &config).unwrap();
//! manager.finish_load(&page.dom, Ok(sample_document()));
//!
//! assert_eq!(linked_ids(&page.dom.html(page.container)), vec![3, 2, 1]);
//! ```

use crate::dom::DomBackend;
use crate::dom::mock::{MockDom, NodeId};
use crate::types::{Post, PostsDocument};

// =========================================================================
// Post fixtures
// =========================================================================

/// A post with predictable field values derived from its id.
pub fn post(id: u32, category: &str) -> Post {
    Post {
        id,
        title: format!("Post {id}"),
        category: category.to_string(),
        excerpt: format!("Excerpt of post {id}"),
        content: format!("<p>Body of post {id}</p>"),
        date: format!("2024-01-{:02}", id % 28 + 1),
        read_time: "5 min".to_string(),
        author: "Jane Doe".to_string(),
        tags: vec![category.to_lowercase(), "notes".to_string()],
    }
}

/// Three posts, newest first: 3 (CSS), 2 (React), 1 (CSS).
pub fn sample_document() -> PostsDocument {
    PostsDocument {
        posts: vec![post(3, "CSS"), post(2, "React"), post(1, "CSS")],
        categories: vec!["CSS".to_string(), "React".to_string()],
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Ids of a post selection, in order.
pub fn post_ids(posts: &[&Post]) -> Vec<u32> {
    posts.iter().map(|p| p.id).collect()
}

/// Post ids linked from rendered markup, in document order.
///
/// Works on anything rendered through `render::post_href`.
pub fn linked_ids(html: &str) -> Vec<u32> {
    html.split("?id=")
        .skip(1)
        .filter_map(|rest| {
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            rest[..end].parse().ok()
        })
        .collect()
}

/// Find an element by id. Panics if not found.
pub fn by_id(dom: &MockDom, id: &str) -> NodeId {
    dom.element_by_id(id)
        .unwrap_or_else(|| panic!("element '#{id}' not found in mock document"))
}

pub fn has_class(dom: &MockDom, node: NodeId, class: &str) -> bool {
    dom.classes(node).iter().any(|c| c == class)
}

// =========================================================================
// Page skeletons
// =========================================================================

/// Navbar with desktop links, theme toggles and the mobile menu.
pub fn chrome(dom: &MockDom) {
    let body = dom.body_id();
    let nav = dom.append(body, "nav#navbar");
    dom.set_offsets(nav, 0.0, 64.0);
    for href in ["#about", "#skills", "#contact"] {
        dom.set_attr(dom.append(nav, "a.nav-link"), "href", href);
    }
    dom.append(nav, "button#theme-toggle");
    dom.append(nav, "button#theme-toggle-mobile");
    let btn = dom.append(nav, "button#mobile-menu-btn");
    dom.append(btn, "svg");
    let menu = dom.append(nav, "div#mobile-menu.hidden");
    for href in ["#about", "#skills"] {
        dom.set_attr(dom.append(menu, "a"), "href", href);
    }
}

pub struct IndexPage {
    pub dom: MockDom,
    pub container: NodeId,
    pub filter: NodeId,
    pub all_button: NodeId,
    pub loading: NodeId,
    pub empty_state: NodeId,
}

/// Listing page: filter bar with a static "all" button, loading indicator,
/// empty state and an empty cards container.
pub fn blog_index_page() -> IndexPage {
    let dom = MockDom::new();
    chrome(&dom);
    let body = dom.body_id();
    dom.append(body, "span#typing-text");
    let filter = dom.append(body, "div#category-filter");
    let all_button = dom.append(filter, "button.category-btn.active");
    dom.set_attr(all_button, "data-category", "all");
    let loading = dom.append(body, "div#loading");
    let container = dom.append(body, "div#posts-container");
    let empty_state = dom.append(body, "div#empty-state.hidden");
    IndexPage {
        dom,
        container,
        filter,
        all_button,
        loading,
        empty_state,
    }
}

/// Single-post page at `post.html<search>`.
pub fn post_page(search: &str) -> MockDom {
    let dom = MockDom::new();
    chrome(&dom);
    dom.set_location(&format!("http://localhost/post.html{search}"), search);
    let body = dom.body_id();
    let article = dom.append(body, "article");
    for id in [
        "post-title",
        "post-category",
        "post-author",
        "post-date",
        "post-readtime",
        "post-tags",
        "post-content",
    ] {
        dom.append(article, &format!("div#{id}"));
    }
    let prev = dom.append(body, "a#prev-post.hidden");
    dom.append(prev, "span#prev-post-title");
    let next = dom.append(body, "a#next-post.hidden");
    dom.append(next, "span#next-post-title");
    let section = dom.append(body, "section#related");
    dom.append(section, "div#related-posts");
    dom.append(body, "button#share-twitter");
    dom
}

pub struct ContactPage {
    pub dom: MockDom,
    pub form: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub subject: NodeId,
    pub message: NodeId,
    pub submit: NodeId,
    pub submit_text: NodeId,
    pub spinner: NodeId,
    pub modal: NodeId,
    pub backdrop: NodeId,
    pub close: NodeId,
}

/// Contact page: name/email/message are required, subject is optional.
pub fn contact_page() -> ContactPage {
    let dom = MockDom::new();
    chrome(&dom);
    let body = dom.body_id();
    let form = dom.append(body, "form#contact-form");
    let field = |notation: &str, required: bool, kind: Option<&str>| {
        let node = dom.append(form, notation);
        if required {
            dom.set_attr(node, "required", "");
        }
        if let Some(kind) = kind {
            dom.set_attr(node, "type", kind);
        }
        let id = dom.node(node).id.unwrap_or_default();
        dom.append(form, &format!("p#{id}-error.hidden"));
        node
    };
    let name = field("input#name", true, Some("text"));
    let email = field("input#email", true, Some("email"));
    let subject = field("input#subject", false, None);
    let message = field("textarea#message", true, None);
    let submit = dom.append(form, "button#submit-btn");
    let submit_text = dom.append(submit, "span#submit-text");
    dom.set_text(&submit_text, "Send Message");
    let spinner = dom.append(submit, "span#submit-spinner.hidden");
    let modal = dom.append(body, "div#success-modal.hidden");
    let backdrop = dom.append(modal, "div.modal-backdrop");
    let close = dom.append(modal, "button#close-modal");
    ContactPage {
        dom,
        form,
        name,
        email,
        subject,
        message,
        submit,
        submit_text,
        spinner,
        modal,
        backdrop,
        close,
    }
}

impl ContactPage {
    /// Fill every field with valid input.
    pub fn fill_valid(&self) {
        self.dom.set_value(self.name, "Jane");
        self.dom.set_value(self.email, "jane@example.com");
        self.dom.set_value(self.subject, "Hello");
        self.dom.set_value(self.message, "Nice blog.");
    }
}

/// Résumé page: navbar, hero and three sections with reveal targets.
pub fn resume_page() -> MockDom {
    let dom = MockDom::new();
    chrome(&dom);
    let body = dom.body_id();
    for (i, id) in ["about", "skills", "contact"].into_iter().enumerate() {
        let section = dom.append(body, &format!("section#{id}"));
        dom.set_offsets(section, 600.0 * (i as f64 + 1.0), 600.0);
        dom.append(section, "div.fade-in");
        dom.append(section, "div.fade-in-left");
        dom.append(section, "div.fade-in-right");
    }
    dom.append(body, "button#scroll-top");
    dom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_ids_reads_query_ids_in_order() {
        let html = r#"<a href="post.html?id=12">x</a><a href="post.html?id=3">y</a>"#;
        assert_eq!(linked_ids(html), vec![12, 3]);
    }

    #[test]
    fn contact_page_has_error_slots() {
        let page = contact_page();
        for id in ["name-error", "email-error", "subject-error", "message-error"] {
            by_id(&page.dom, id);
        }
    }
}
