//! Which blog page a URL path belongs to.
//!
//! The blog bundle wires the shared chrome on every page and the
//! page-specific components only on their own page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogPage {
    /// `index.html` or any directory URL: typing banner and post list.
    Index,
    /// `post.html?id=N`.
    Post,
    /// `contact.html`.
    Contact,
    /// Anything else gets the shared chrome only.
    Other,
}

impl BlogPage {
    pub fn from_path(pathname: &str) -> Self {
        if pathname.contains("index.html") || pathname.ends_with('/') {
            BlogPage::Index
        } else if pathname.contains("post.html") {
            BlogPage::Post
        } else if pathname.contains("contact.html") {
            BlogPage::Contact
        } else {
            BlogPage::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_urls_are_the_index() {
        for path in ["/", "/blog/", "/index.html", "/blog/index.html"] {
            assert_eq!(BlogPage::from_path(path), BlogPage::Index, "{path}");
        }
    }

    #[test]
    fn post_and_contact_pages() {
        assert_eq!(BlogPage::from_path("/blog/post.html"), BlogPage::Post);
        assert_eq!(BlogPage::from_path("/contact.html"), BlogPage::Contact);
    }

    #[test]
    fn unknown_pages_get_chrome_only() {
        assert_eq!(BlogPage::from_path("/about.html"), BlogPage::Other);
        assert_eq!(BlogPage::from_path(""), BlogPage::Other);
    }
}
