//! Scroll-to-top button.

use super::{VISIBLE, set_class};
use crate::config::ScrollTopConfig;
use crate::dom::{DomBackend, ScrollMode};

pub struct ScrollToTop<D: DomBackend> {
    button: D::Element,
    threshold: f64,
}

impl<D: DomBackend> ScrollToTop<D> {
    pub fn bind(dom: &D, config: &ScrollTopConfig) -> Option<Self> {
        Some(Self {
            button: dom.element_by_id("scroll-top")?,
            threshold: config.threshold,
        })
    }

    pub fn button(&self) -> &D::Element {
        &self.button
    }

    pub fn on_scroll(&self, dom: &D) {
        set_class(dom, &self.button, VISIBLE, dom.scroll_y() > self.threshold);
    }

    pub fn on_click(&self, dom: &D) {
        dom.scroll_to(0.0, ScrollMode::Smooth);
    }
}
