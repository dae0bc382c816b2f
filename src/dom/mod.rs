//! The DOM operations every behavior component is written against.
//!
//! Components never touch `web_sys` directly. They resolve their elements once
//! through a [`DomBackend`] at bind time and mutate them through the same
//! trait afterwards, which keeps every behavior unit-testable natively.
//!
//! The production implementation is `WebDom` (in the `web` module, compiled
//! only for `wasm32`). Tests use [`mock::MockDom`], an in-memory node table
//! that records navigations, scrolls and popups.

#[cfg(test)]
pub mod mock;

/// Scroll animation style for programmatic scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

/// Trait for DOM backends.
///
/// `Element` is a cheap, clonable handle. Two handles compare equal when they
/// refer to the same node.
pub trait DomBackend {
    type Element: Clone + PartialEq;

    // -- lookup ------------------------------------------------------------

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching a CSS selector, in document order. With a scope,
    /// only descendants of that element are searched.
    fn query_all(&self, scope: Option<&Self::Element>, selector: &str) -> Vec<Self::Element>;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;

    fn body(&self) -> Option<Self::Element>;

    fn parent(&self, el: &Self::Element) -> Option<Self::Element>;

    // -- tree mutation -----------------------------------------------------

    fn create_element(&self, tag: &str) -> Option<Self::Element>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element);

    fn remove(&self, el: &Self::Element);

    fn set_text(&self, el: &Self::Element, text: &str);

    fn set_inner_html(&self, el: &Self::Element, html: &str);

    // -- classes, attributes, style ---------------------------------------

    fn add_class(&self, el: &Self::Element, class: &str);

    fn remove_class(&self, el: &Self::Element, class: &str);

    fn has_class(&self, el: &Self::Element, class: &str) -> bool;

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str);

    fn set_style(&self, el: &Self::Element, property: &str, value: &str);

    // -- form controls -----------------------------------------------------

    fn set_disabled(&self, el: &Self::Element, disabled: bool);

    /// Current value of an `<input>` or `<textarea>`; empty for anything else.
    fn value(&self, el: &Self::Element) -> String;

    /// Lower-cased `type` of an input control (`"text"` when unspecified).
    /// Text areas report `"textarea"`.
    fn input_type(&self, el: &Self::Element) -> String;

    fn reset_form(&self, form: &Self::Element);

    // -- layout & scrolling ------------------------------------------------

    fn offset_top(&self, el: &Self::Element) -> f64;

    fn offset_height(&self, el: &Self::Element) -> f64;

    fn scroll_y(&self) -> f64;

    fn scroll_to(&self, top: f64, mode: ScrollMode);

    fn scroll_into_view(&self, el: &Self::Element, mode: ScrollMode);

    // -- document & window ---------------------------------------------------

    fn set_title(&self, title: &str);

    fn location_href(&self) -> String;

    fn location_search(&self) -> String;

    fn navigate(&self, url: &str);

    fn open_popup(&self, url: &str, features: &str);

    fn storage_get(&self, key: &str) -> Option<String>;

    fn storage_set(&self, key: &str, value: &str);
}
