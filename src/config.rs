//! Behavior configuration.
//!
//! Every tunable constant used by the components (animation speeds, scroll
//! thresholds, class names, labels, data URLs) lives here. Each bundle starts
//! from a stock preset, [`BehaviorConfig::blog`] or [`BehaviorConfig::resume`],
//! and a page may override any subset of it with an inline TOML overlay:
//!
//! ```html
//! <script type="application/toml" id="pagewire-config">
//! [typing]
//! texts = ["Hello", "Bonjour"]
//!
//! [navbar]
//! scrolled_threshold = 24
//! </script>
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # Blog preset shown; the résumé preset differs where noted.
//!
//! [logging]
//! level = "info"                # error | warn | info | debug | trace
//!
//! [theme]
//! storage_key = "theme"
//! dark_class = "dark"
//!
//! [menu]
//! animated = false              # résumé: true (hidden/open + icon swap)
//! close_delay_ms = 300
//!
//! [navbar]
//! hide_on_scroll = true         # résumé: false
//! hide_after = 100
//! scrolled_threshold = 10       # résumé: 50
//! scrolled_class = "scrolled"   # résumé: "navbar-scrolled"
//!
//! [reveal]
//! selector = ".fade-in"         # résumé: ".fade-in, .fade-in-left, .fade-in-right"
//! threshold = 0.1
//! root_margin = "0px 0px -50px 0px"  # résumé: "0px 0px -100px 0px"
//! once = true                   # résumé: false
//!
//! [smooth_scroll]
//! navbar_offset = false         # résumé: true
//! fallback_navbar_height = 80
//!
//! [scroll_top]
//! threshold = 500
//!
//! [active_nav]
//! root_margin = "-50% 0px -50% 0px"
//!
//! [typing]
//! texts = ["Welcome to the dev blog", "..."]
//! typing_speed_ms = 100
//! deleting_speed_ms = 50
//! pause_ms = 2000
//! advance_delay_ms = 500
//!
//! [posts]
//! data_url = "data/posts.json"
//! index_page = "index.html"
//! post_page = "post.html"
//! related_limit = 3
//! site_title = "Dev Blog"
//!
//! [contact]
//! submit_delay_ms = 2000
//! idle_label = "Send Message"
//! loading_label = "Sending..."
//!
//! [toast]
//! show_delay_ms = 10
//! duration_ms = 3000
//! fade_ms = 300
//!
//! [share]
//! popup_width = 600
//! popup_height = 400
//!
//! [messages]
//! load_error = "Failed to load posts."
//! copy_success = "Link copied!"
//! copy_failure = "Could not copy the link."
//! read_time_suffix = "read"
//! ```
//!
//! Overlays are sparse: only the keys present override the preset. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Which page bundle a config preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bundle {
    Blog,
    Resume,
}

impl Bundle {
    pub fn name(self) -> &'static str {
        match self {
            Bundle::Blog => "blog",
            Bundle::Resume => "resume",
        }
    }
}

/// Complete behavior configuration for one bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    pub logging: LoggingConfig,
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub navbar: NavbarConfig,
    pub reveal: RevealConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub scroll_top: ScrollTopConfig,
    pub active_nav: ActiveNavConfig,
    pub typing: TypingConfig,
    pub posts: PostsConfig,
    pub contact: ContactConfig,
    pub toast: ToastConfig,
    pub share: ShareConfig,
    pub messages: MessagesConfig,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::blog()
    }
}

impl BehaviorConfig {
    /// Stock preset for the blog bundle.
    pub fn blog() -> Self {
        Self {
            logging: LoggingConfig::default(),
            theme: ThemeConfig::default(),
            menu: MenuConfig::default(),
            navbar: NavbarConfig::default(),
            reveal: RevealConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            scroll_top: ScrollTopConfig::default(),
            active_nav: ActiveNavConfig::default(),
            typing: TypingConfig::default(),
            posts: PostsConfig::default(),
            contact: ContactConfig::default(),
            toast: ToastConfig::default(),
            share: ShareConfig::default(),
            messages: MessagesConfig::default(),
        }
    }

    /// Stock preset for the résumé bundle.
    pub fn resume() -> Self {
        Self {
            menu: MenuConfig {
                animated: true,
                ..MenuConfig::default()
            },
            navbar: NavbarConfig {
                hide_on_scroll: false,
                scrolled_threshold: 50.0,
                scrolled_class: "navbar-scrolled".to_string(),
                ..NavbarConfig::default()
            },
            reveal: RevealConfig {
                selector: ".fade-in, .fade-in-left, .fade-in-right".to_string(),
                root_margin: "0px 0px -100px 0px".to_string(),
                once: false,
                ..RevealConfig::default()
            },
            smooth_scroll: SmoothScrollConfig {
                navbar_offset: true,
                ..SmoothScrollConfig::default()
            },
            ..Self::blog()
        }
    }

    pub fn preset(bundle: Bundle) -> Self {
        match bundle {
            Bundle::Blog => Self::blog(),
            Bundle::Resume => Self::resume(),
        }
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing.texts.is_empty() {
            return Err(ConfigError::Validation(
                "typing.texts must not be empty".into(),
            ));
        }
        if self.typing.texts.iter().any(|t| t.is_empty()) {
            return Err(ConfigError::Validation(
                "typing.texts entries must not be empty".into(),
            ));
        }
        if self.typing.typing_speed_ms == 0 || self.typing.deleting_speed_ms == 0 {
            return Err(ConfigError::Validation(
                "typing speeds must be greater than zero".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be between 0.0 and 1.0".into(),
            ));
        }
        if self.logging.level().is_none() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of error, warn, info, debug, trace",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Console logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Option<log::Level> {
        self.level.parse().ok()
    }
}

/// Theme persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Local storage key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Class toggled on the root element while the dark theme is active.
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            dark_class: "dark".to_string(),
        }
    }
}

/// Mobile menu settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    /// Animated menus also toggle `hidden` (after a delay on close) and swap
    /// the button icon.
    pub animated: bool,
    pub close_delay_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            animated: false,
            close_delay_ms: 300,
        }
    }
}

impl MenuConfig {
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms.into())
    }
}

/// Fixed navbar scroll behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    /// Hide the navbar while scrolling down past `hide_after`.
    pub hide_on_scroll: bool,
    pub hide_after: f64,
    /// Apply `scrolled_class` once the offset exceeds this value.
    pub scrolled_threshold: f64,
    pub scrolled_class: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            hide_on_scroll: true,
            hide_after: 100.0,
            scrolled_threshold: 10.0,
            scrolled_class: "scrolled".to_string(),
        }
    }
}

impl NavbarConfig {
    /// Offset past which scrolling down hides the navbar, if hiding is on.
    pub fn hide_offset(&self) -> Option<f64> {
        self.hide_on_scroll.then_some(self.hide_after)
    }
}

/// Scroll-triggered reveal animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    /// Stop observing an element once it has been revealed.
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".fade-in".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            once: true,
        }
    }
}

/// In-page anchor scrolling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothScrollConfig {
    /// Scroll to `offsetTop - navbarHeight` instead of `scrollIntoView`.
    pub navbar_offset: bool,
    /// Navbar height used when `#navbar` is missing or has no height.
    pub fallback_navbar_height: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            navbar_offset: false,
            fallback_navbar_height: 80.0,
        }
    }
}

/// Scroll-to-top button.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollTopConfig {
    pub threshold: f64,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self { threshold: 500.0 }
    }
}

/// Active section highlighting in the navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActiveNavConfig {
    pub root_margin: String,
}

impl Default for ActiveNavConfig {
    fn default() -> Self {
        Self {
            root_margin: "-50% 0px -50% 0px".to_string(),
        }
    }
}

/// Typewriter headline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    pub texts: Vec<String>,
    pub typing_speed_ms: u32,
    pub deleting_speed_ms: u32,
    pub pause_ms: u32,
    pub advance_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            texts: vec![
                "Welcome to the dev blog".to_string(),
                "Stories from frontend development".to_string(),
                "Everyday life with code".to_string(),
            ],
            typing_speed_ms: 100,
            deleting_speed_ms: 50,
            pause_ms: 2000,
            advance_delay_ms: 500,
        }
    }
}

/// Post listing and single-post pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostsConfig {
    /// URL of the posts document, relative to the page.
    pub data_url: String,
    /// Redirect target for unknown or invalid post ids.
    pub index_page: String,
    /// Single-post page; cards link to `<post_page>?id=<id>`.
    pub post_page: String,
    pub related_limit: usize,
    /// Appended to the post title in the document title.
    pub site_title: String,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            data_url: "data/posts.json".to_string(),
            index_page: "index.html".to_string(),
            post_page: "post.html".to_string(),
            related_limit: 3,
            site_title: "Dev Blog".to_string(),
        }
    }
}

/// Contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Simulated network delay before the success modal opens.
    pub submit_delay_ms: u32,
    pub idle_label: String,
    pub loading_label: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            idle_label: "Send Message".to_string(),
            loading_label: "Sending...".to_string(),
        }
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.into())
    }
}

/// Toast lifecycle timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastConfig {
    pub show_delay_ms: u32,
    pub duration_ms: u32,
    pub fade_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 10,
            duration_ms: 3000,
            fade_ms: 300,
        }
    }
}

/// Share popup window size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareConfig {
    pub popup_width: u32,
    pub popup_height: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            popup_width: 600,
            popup_height: 400,
        }
    }
}

/// User-facing strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessagesConfig {
    pub load_error: String,
    pub copy_success: String,
    pub copy_failure: String,
    /// Appended to a post's read time on cards (`"5 min read"`).
    pub read_time_suffix: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            load_error: "Failed to load posts.".to_string(),
            copy_success: "Link copied!".to_string(),
            copy_failure: "Could not copy the link.".to_string(),
            read_time_suffix: "read".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns a bundle's stock preset as a `toml::Value::Table`.
///
/// This is the base layer that page overlays are merged on top of.
pub fn stock_defaults_value(bundle: Bundle) -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(BehaviorConfig::preset(bundle))?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<BehaviorConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BehaviorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Resolve a bundle's config from its preset and the page's overlay source.
///
/// A blank or absent overlay yields the stock preset.
pub fn load_config(bundle: Bundle, overlay: Option<&str>) -> Result<BehaviorConfig, ConfigError> {
    let base = stock_defaults_value(bundle)?;
    let overlay = match overlay.map(str::trim) {
        Some(src) if !src.is_empty() => Some(toml::from_str::<toml::Value>(src)?),
        _ => None,
    };
    resolve_config(base, overlay)
}
