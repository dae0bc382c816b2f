//! In-page anchor scrolling.
//!
//! Clicks on `a[href^="#"]` are intercepted when the fragment is bare (`#`,
//! scroll to top) or resolves to an element. Fragments that match nothing
//! are left to the browser.

use crate::config::SmoothScrollConfig;
use crate::dom::{DomBackend, ScrollMode};

const ANCHORS: &str = r##"a[href^="#"]"##;

pub struct SmoothScroll<D: DomBackend> {
    anchors: Vec<D::Element>,
    /// Only resolved when scrolling by offset.
    navbar: Option<D::Element>,
    navbar_offset: bool,
    fallback_navbar_height: f64,
}

impl<D: DomBackend> SmoothScroll<D> {
    pub fn bind(dom: &D, config: &SmoothScrollConfig) -> Option<Self> {
        let anchors = dom.query_all(None, ANCHORS);
        if anchors.is_empty() {
            return None;
        }
        let navbar = if config.navbar_offset {
            dom.element_by_id("navbar")
        } else {
            None
        };
        Some(Self {
            anchors,
            navbar,
            navbar_offset: config.navbar_offset,
            fallback_navbar_height: config.fallback_navbar_height,
        })
    }

    pub fn anchors(&self) -> &[D::Element] {
        &self.anchors
    }

    fn navbar_height(&self, dom: &D) -> f64 {
        self.navbar
            .as_ref()
            .map(|nav| dom.offset_height(nav))
            .filter(|h| *h > 0.0)
            .unwrap_or(self.fallback_navbar_height)
    }

    /// Handle a click on `anchor`. Returns `true` when the default navigation
    /// must be prevented.
    pub fn on_click(&self, dom: &D, anchor: &D::Element) -> bool {
        let Some(href) = dom.attribute(anchor, "href") else {
            return false;
        };
        let Some(fragment) = href.strip_prefix('#') else {
            return false;
        };
        if fragment.is_empty() {
            dom.scroll_to(0.0, ScrollMode::Smooth);
            return true;
        }
        let Some(target) = dom.element_by_id(fragment) else {
            return false;
        };
        if self.navbar_offset {
            let top = dom.offset_top(&target) - self.navbar_height(dom);
            dom.scroll_to(top, ScrollMode::Smooth);
        } else {
            dom.scroll_into_view(&target, ScrollMode::Smooth);
        }
        true
    }
}
