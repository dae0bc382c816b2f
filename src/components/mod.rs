//! Page behaviors.
//!
//! Each component follows the same shape:
//!
//! 1. `bind(dom, config)` resolves every element the component needs, once.
//!    A missing required element yields `None` and the component is skipped.
//! 2. Event methods (`on_scroll`, `on_click`, ...) take the DOM backend and
//!    perform the mutation for one event.
//!
//! Components own no listeners or timers. Wiring events and scheduling
//! delays is the job of the `web` module, which keeps every behavior here
//! testable against the `MockDom` test double.
//!
//! | Component | Bundle | Elements |
//! |-----------|--------|----------|
//! | [`theme::ThemeManager`] | blog | `#theme-toggle`, `#theme-toggle-mobile` |
//! | [`menu::MobileMenu`] | both | `#mobile-menu-btn`, `#mobile-menu` |
//! | [`navbar::NavbarScroll`] | both | `#navbar` |
//! | [`reveal::ScrollAnimation`] | both | reveal selector |
//! | [`smooth_scroll::SmoothScroll`] | both | `a[href^="#"]` |
//! | [`scroll_top::ScrollToTop`] | résumé | `#scroll-top` |
//! | [`active_nav::ActiveNavLink`] | résumé | `section[id]`, `nav a[href^="#"]` |
//! | [`typing::TypingView`] | blog index | `#typing-text` |
//! | [`post_list::PostManager`] | blog index | `#posts-container`, `#category-filter` |
//! | [`post_page::PostPage`] | blog post | `#post-content`, ... |
//! | [`contact::ContactForm`] | blog contact | `#contact-form`, ... |
//! | [`toast::Toaster`] | blog | `<body>` |

pub mod active_nav;
pub mod contact;
pub mod menu;
pub mod navbar;
pub mod post_list;
pub mod post_page;
pub mod reveal;
pub mod scroll_top;
pub mod smooth_scroll;
pub mod theme;
pub mod toast;
pub mod typing;

pub const HIDDEN: &str = "hidden";
pub const VISIBLE: &str = "visible";
pub const ACTIVE: &str = "active";
pub const OPEN: &str = "open";

use crate::dom::DomBackend;

/// Add `class` when `on`, remove it otherwise.
pub(crate) fn set_class<D: DomBackend>(dom: &D, el: &D::Element, class: &str, on: bool) {
    if on {
        dom.add_class(el, class);
    } else {
        dom.remove_class(el, class);
    }
}
