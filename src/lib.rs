//! # Pagewire
//!
//! Client-side behaviors for two static websites, a developer blog and a
//! one-page résumé, compiled to WebAssembly. The HTML is written by hand and
//! served as-is; this crate attaches behavior to elements that are already
//! there: theme toggling, a mobile menu, scroll effects, a typing banner,
//! posts rendered from a static JSON file, a contact form with local
//! validation, social sharing and copy-link toasts.
//!
//! # Architecture: Components Over a DOM Trait
//!
//! ```text
//!   page HTML  ──▶  web::start_blog()/start_resume()
//!                      │  resolve config, install logger
//!                      ▼
//!                  components::*   (bind once, then react to events)
//!                      │
//!                      ▼
//!                  DomBackend  ──▶  WebDom (browser) | MockDom (tests)
//! ```
//!
//! Every component resolves its elements once in a `bind` step and returns
//! `None` when the page does not have them, so a missing element disables
//! that one behavior and nothing else. Components never install listeners or
//! timers themselves: they expose plain methods (`toggle`, `on_scroll`,
//! `finish_load`, ...) and return what the caller has to schedule. The
//! `web` module owns the event listeners, timers and observers and drops
//! all of them when a bundle is torn down.
//!
//! This split keeps every behavior testable natively: unit tests drive the
//! components through the recording `MockDom` test double without a
//! browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`components`] | One type per behavior, generic over [`dom::DomBackend`] |
//! | [`config`] | Stock presets per bundle, TOML overlays, validation |
//! | [`dom`] | The DOM abstraction and its test double |
//! | [`posts`] | Filtering, neighbors, related posts, URL parsing |
//! | [`render`] | Maud templates for cards, tags, meta lines and errors |
//! | [`route`] | Blog page detection from the URL path |
//! | [`share`] | Share URLs and popup features |
//! | [`types`] | `Post` and the `posts.json` document |
//! | [`typing`] | Typewriter state machine |
//! | [`validation`] | Contact form field rules |
//! | `web` | Browser runtime and `#[wasm_bindgen]` exports (`wasm32` only) |
//!
//! # Design Decisions
//!
//! ## Maud for Generated Markup
//!
//! Cards, tag lists and error messages are built with
//! [Maud](https://maud.lambda.xyz/) and inserted with `innerHTML`. Every
//! interpolated field is escaped; only a post's `content`, which is HTML by
//! definition of the data file, is inserted raw.
//!
//! ## Cancellable Scheduling
//!
//! The typing banner, the menu hide delay and toast lifecycles run on timers
//! owned by the bundle. Calling `teardown()` on the handle returned by a
//! start function cancels them along with every listener, so re-running a
//! bundle after swapping the page body does not leave old loops firing.

pub mod components;
pub mod config;
pub mod dom;
pub mod posts;
pub mod render;
pub mod route;
pub mod share;
pub mod types;
pub mod typing;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Crate version, or `dev@<hash>` for builds off a release tag.
pub fn version_string() -> &'static str {
    if env!("PAGEWIRE_ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("PAGEWIRE_GIT_HASH") {
        "" => "dev@unknown",
        hash => dev_version(hash),
    }
}

fn dev_version(hash: &str) -> &'static str {
    use std::sync::OnceLock;
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| format!("dev@{hash}"))
}

#[cfg(test)]
pub(crate) mod test_helpers;
