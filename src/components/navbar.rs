//! Fixed navbar reacting to scroll position.
//!
//! Two independent checks run on every scroll event:
//!
//! - direction: when hiding is enabled, scrolling down past `hide_after`
//!   adds `hidden`; anything else removes it.
//! - threshold: `scrolled_class` is present while the offset exceeds
//!   `scrolled_threshold`.

use super::{HIDDEN, set_class};
use crate::config::NavbarConfig;
use crate::dom::DomBackend;

pub struct NavbarScroll<D: DomBackend> {
    navbar: D::Element,
    last_scroll_y: f64,
    config: NavbarConfig,
}

impl<D: DomBackend> NavbarScroll<D> {
    pub fn bind(dom: &D, config: &NavbarConfig) -> Option<Self> {
        let navbar = dom.element_by_id("navbar")?;
        Some(Self {
            navbar,
            last_scroll_y: 0.0,
            config: config.clone(),
        })
    }

    pub fn on_scroll(&mut self, dom: &D) {
        let y = dom.scroll_y();
        if let Some(hide_after) = self.config.hide_offset() {
            let hide = y > self.last_scroll_y && y > hide_after;
            set_class(dom, &self.navbar, HIDDEN, hide);
        }
        set_class(
            dom,
            &self.navbar,
            &self.config.scrolled_class,
            y > self.config.scrolled_threshold,
        );
        self.last_scroll_y = y;
    }
}
