//! Social share links.
//!
//! Both providers receive the page URL (and Twitter the page title)
//! percent-encoded as a single query component.

use crate::config::ShareConfig;
use crate::dom::DomBackend;

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

/// Window name passed to `window.open`.
pub const POPUP_TARGET: &str = "_blank";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Twitter,
    Facebook,
}

pub fn twitter_url(page_url: &str, title: &str) -> String {
    format!(
        "{TWITTER_INTENT}?url={}&text={}",
        urlencoding::encode(page_url),
        urlencoding::encode(title)
    )
}

pub fn facebook_url(page_url: &str) -> String {
    format!("{FACEBOOK_SHARER}?u={}", urlencoding::encode(page_url))
}

/// `window.open` feature string for the share popup.
pub fn popup_features(config: &ShareConfig) -> String {
    format!("width={},height={}", config.popup_width, config.popup_height)
}

/// Open a share popup for the current page.
pub fn share<D: DomBackend>(dom: &D, provider: Provider, title: &str, config: &ShareConfig) {
    let href = dom.location_href();
    let url = match provider {
        Provider::Twitter => twitter_url(&href, title),
        Provider::Facebook => facebook_url(&href),
    };
    log::debug!("opening {provider:?} share popup");
    dom.open_popup(&url, &popup_features(config));
}
