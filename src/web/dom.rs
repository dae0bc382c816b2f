//! [`DomBackend`] over `web_sys`.
//!
//! Every method is infallible from the component's point of view: a DOM call
//! that throws (invalid selector, storage disabled, ...) is logged at debug
//! level and treated as "nothing there" or "nothing done".

use crate::dom::{DomBackend, ScrollMode};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Storage,
    Window,
};

use crate::share::POPUP_TARGET;

/// Log and drop a failed DOM call.
fn ignore<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(err) => {
            log::debug!("{what} failed: {err:?}");
            None
        }
    }
}

fn behavior(mode: ScrollMode) -> ScrollBehavior {
    match mode {
        ScrollMode::Smooth => ScrollBehavior::Smooth,
        ScrollMode::Instant => ScrollBehavior::Instant,
    }
}

#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// `None` outside a browser main thread.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn pathname(&self) -> String {
        ignore("location.pathname", self.window.location().pathname()).unwrap_or_default()
    }

    fn storage(&self) -> Option<Storage> {
        ignore("localStorage", self.window.local_storage()).flatten()
    }

    fn node_list(list: web_sys::NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl DomBackend for WebDom {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, scope: Option<&Element>, selector: &str) -> Vec<Element> {
        let result = match scope {
            Some(el) => el.query_selector_all(selector),
            None => self.document.query_selector_all(selector),
        };
        ignore("querySelectorAll", result)
            .map(Self::node_list)
            .unwrap_or_default()
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn parent(&self, el: &Element) -> Option<Element> {
        el.parent_element()
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        ignore("createElement", self.document.create_element(tag))
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        ignore("appendChild", parent.append_child(child));
    }

    fn remove(&self, el: &Element) {
        el.remove();
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_inner_html(&self, el: &Element, html: &str) {
        el.set_inner_html(html);
    }

    fn add_class(&self, el: &Element, class: &str) {
        ignore("classList.add", el.class_list().add_1(class));
    }

    fn remove_class(&self, el: &Element, class: &str) {
        ignore("classList.remove", el.class_list().remove_1(class));
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&self, el: &Element, name: &str, value: &str) {
        ignore("setAttribute", el.set_attribute(name, value));
    }

    fn set_style(&self, el: &Element, property: &str, value: &str) {
        let Some(el) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        if value.is_empty() {
            ignore("style.removeProperty", style.remove_property(property));
        } else {
            ignore("style.setProperty", style.set_property(property, value));
        }
    }

    fn set_disabled(&self, el: &Element, disabled: bool) {
        if disabled {
            ignore("setAttribute", el.set_attribute("disabled", ""));
        } else {
            ignore("removeAttribute", el.remove_attribute("disabled"));
        }
    }

    fn value(&self, el: &Element) -> String {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn input_type(&self, el: &Element) -> String {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            // The `type` property already normalizes case and defaults.
            input.type_()
        } else if el.dyn_ref::<HtmlTextAreaElement>().is_some() {
            "textarea".to_string()
        } else {
            String::new()
        }
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn offset_top(&self, el: &Element) -> f64 {
        el.dyn_ref::<HtmlElement>()
            .map(|e| f64::from(e.offset_top()))
            .unwrap_or(0.0)
    }

    fn offset_height(&self, el: &Element) -> f64 {
        el.dyn_ref::<HtmlElement>()
            .map(|e| f64::from(e.offset_height()))
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        ignore("scrollY", self.window.scroll_y()).unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64, mode: ScrollMode) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(behavior(mode));
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, el: &Element, mode: ScrollMode) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(behavior(mode));
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn location_href(&self) -> String {
        ignore("location.href", self.window.location().href()).unwrap_or_default()
    }

    fn location_search(&self) -> String {
        ignore("location.search", self.window.location().search()).unwrap_or_default()
    }

    fn navigate(&self, url: &str) {
        ignore("location.href=", self.window.location().set_href(url));
    }

    fn open_popup(&self, url: &str, features: &str) {
        ignore(
            "window.open",
            self.window
                .open_with_url_and_target_and_features(url, POPUP_TARGET, features),
        );
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        ignore("localStorage.getItem", self.storage()?.get_item(key)).flatten()
    }

    fn storage_set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            ignore("localStorage.setItem", storage.set_item(key, value));
        }
    }
}
