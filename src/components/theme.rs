//! Light/dark theme toggle.
//!
//! The initial theme is applied by an inline script in the page head before
//! any of this runs. This component only reacts to toggle clicks and to the
//! OS color-scheme changing.

use super::set_class;
use crate::config::ThemeConfig;
use crate::dom::DomBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct ThemeManager<D: DomBackend> {
    root: D::Element,
    toggles: Vec<D::Element>,
    storage_key: String,
    dark_class: String,
}

impl<D: DomBackend> ThemeManager<D> {
    pub fn bind(dom: &D, config: &ThemeConfig) -> Option<Self> {
        let root = dom.root()?;
        let toggles = ["theme-toggle", "theme-toggle-mobile"]
            .into_iter()
            .filter_map(|id| dom.element_by_id(id))
            .collect();
        Some(Self {
            root,
            toggles,
            storage_key: config.storage_key.clone(),
            dark_class: config.dark_class.clone(),
        })
    }

    /// Buttons that should call [`toggle`](Self::toggle) on click.
    pub fn toggles(&self) -> &[D::Element] {
        &self.toggles
    }

    pub fn current(&self, dom: &D) -> Theme {
        if dom.has_class(&self.root, &self.dark_class) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(&self, dom: &D) -> Theme {
        let next = self.current(dom).flipped();
        self.set_theme(dom, next);
        next
    }

    /// Apply and persist `theme`.
    pub fn set_theme(&self, dom: &D, theme: Theme) {
        set_class(dom, &self.root, &self.dark_class, theme == Theme::Dark);
        dom.storage_set(&self.storage_key, theme.as_str());
        log::debug!("theme set to {}", theme.as_str());
    }

    /// Follow the OS preference unless the user picked a theme explicitly.
    /// Returns whether the theme was applied.
    pub fn on_system_change(&self, dom: &D, prefers_dark: bool) -> bool {
        if dom.storage_get(&self.storage_key).is_some() {
            return false;
        }
        let theme = if prefers_dark { Theme::Dark } else { Theme::Light };
        self.set_theme(dom, theme);
        true
    }
}
