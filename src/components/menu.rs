//! Mobile navigation menu.
//!
//! Two variants share one component:
//!
//! - **simple** (blog): the button toggles `open` on the menu panel.
//! - **animated** (résumé): opening un-hides the panel before adding `open`;
//!   closing removes `open` and re-hides the panel after a delay so the CSS
//!   transition can finish. The button's SVG swaps between a hamburger and a
//!   close glyph.
//!
//! Any link click inside the panel closes it.

use super::{HIDDEN, OPEN};
use crate::config::MenuConfig;
use crate::dom::DomBackend;
use maud::{Markup, html};
use std::time::Duration;

const HAMBURGER_PATH: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";

fn icon_paths(open: bool) -> Markup {
    let d = if open { CLOSE_PATH } else { HAMBURGER_PATH };
    html! {
        path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(d) {}
    }
}

/// What the caller has to do after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    Nothing,
    /// Call [`MobileMenu::finish_close`] after the delay.
    HideAfter(Duration),
    /// A pending hide must not run anymore.
    CancelHide,
}

pub struct MobileMenu<D: DomBackend> {
    button: D::Element,
    panel: D::Element,
    links: Vec<D::Element>,
    animated: bool,
    close_delay: Duration,
}

impl<D: DomBackend> MobileMenu<D> {
    pub fn bind(dom: &D, config: &MenuConfig) -> Option<Self> {
        let button = dom.element_by_id("mobile-menu-btn")?;
        let panel = dom.element_by_id("mobile-menu")?;
        let links = dom.query_all(Some(&panel), "a");
        Some(Self {
            button,
            panel,
            links,
            animated: config.animated,
            close_delay: config.close_delay(),
        })
    }

    pub fn button(&self) -> &D::Element {
        &self.button
    }

    pub fn links(&self) -> &[D::Element] {
        &self.links
    }

    pub fn is_open(&self, dom: &D) -> bool {
        dom.has_class(&self.panel, OPEN)
    }

    /// Menu button click.
    pub fn toggle(&self, dom: &D) -> MenuEffect {
        if self.is_open(dom) {
            self.close(dom)
        } else {
            self.open(dom)
        }
    }

    pub fn open(&self, dom: &D) -> MenuEffect {
        if !self.animated {
            dom.add_class(&self.panel, OPEN);
            return MenuEffect::Nothing;
        }
        dom.remove_class(&self.panel, HIDDEN);
        dom.add_class(&self.panel, OPEN);
        self.swap_icon(dom, true);
        MenuEffect::CancelHide
    }

    /// Also used for link clicks inside the panel.
    pub fn close(&self, dom: &D) -> MenuEffect {
        dom.remove_class(&self.panel, OPEN);
        if !self.animated {
            return MenuEffect::Nothing;
        }
        self.swap_icon(dom, false);
        MenuEffect::HideAfter(self.close_delay)
    }

    /// Delayed half of an animated close. No-op if the menu was re-opened in
    /// the meantime.
    pub fn finish_close(&self, dom: &D) {
        if !self.is_open(dom) {
            dom.add_class(&self.panel, HIDDEN);
        }
    }

    fn swap_icon(&self, dom: &D, open: bool) {
        if let Some(svg) = dom.query_all(Some(&self.button), "svg").first() {
            dom.set_inner_html(svg, &icon_paths(open).into_string());
        }
    }
}
