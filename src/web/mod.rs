//! Browser runtime.
//!
//! Everything here only exists on `wasm32`. The components in
//! [`crate::components`] decide what happens; this module connects them to
//! real events:
//!
//! | Module | Role |
//! |--------|------|
//! | `dom` | [`WebDom`], the `web_sys` implementation of [`DomBackend`](crate::dom::DomBackend) |
//! | `runtime` | Owned listeners, timers, observers, fetch helpers, [`Bindings`] |
//! | `wiring` | Chrome shared by both bundles (theme, menu, navbar, reveal, anchors) |
//! | `blog` | Blog bundle: shared chrome plus per-page components |
//! | `resume` | Résumé bundle |
//! | `exports` | `#[wasm_bindgen]` entry points called from the pages |
//!
//! ## Configuration
//!
//! A page can tune its bundle with an inline TOML overlay in an element with
//! id `pagewire-config`. A malformed overlay is reported on the console and
//! the stock preset is used instead; it never stops the bundle from starting.

mod blog;
mod dom;
mod exports;
mod resume;
mod runtime;
mod wiring;

pub use dom::WebDom;
pub use exports::{
    BundleHandle, copy_link, share_to_facebook, share_to_twitter, start_blog, start_resume,
};
pub use runtime::Bindings;

use crate::config::{BehaviorConfig, Bundle, load_config};
use crate::dom::DomBackend;
use std::sync::Once;

/// Id of the element holding the page's TOML overlay.
pub const CONFIG_ELEMENT_ID: &str = "pagewire-config";

/// Install the console logger and panic hook. Safe to call repeatedly; later
/// calls only adjust the level.
fn init_logging(level: log::Level) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(level));
    });
    log::set_max_level(level.to_level_filter());
}

/// Resolve the behavior config for `bundle` from the page and set up logging.
fn configure(bundle: Bundle, dom: &WebDom) -> BehaviorConfig {
    let overlay = dom
        .element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match load_config(bundle, overlay.as_deref()) {
        Ok(config) => {
            init_logging(config.logging.level().unwrap_or(log::Level::Info));
            config
        }
        Err(err) => {
            let config = BehaviorConfig::preset(bundle);
            init_logging(config.logging.level().unwrap_or(log::Level::Info));
            log::error!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            config
        }
    }
}
