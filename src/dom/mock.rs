//! In-memory [`DomBackend`] for tests.
//!
//! Nodes live in a flat table addressed by [`NodeId`]. Fixtures are built
//! with a compact `tag#id.class` notation:
//!
//! ```rust,ignore
//! let dom = MockDom::new();
//! let nav = dom.append(dom.body_id(), "nav#navbar.fixed");
//! let link = dom.append(nav, "a.nav-link");
//! dom.set_attr(link, "href", "#about");
//! ```
//!
//! Side effects that have no tree representation (navigation, scrolling,
//! popups, form resets) are recorded as [`RecordedOp`]s.

use super::{DomBackend, ScrollMode};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Default)]
pub struct MockNode {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: String,
    pub html: String,
    pub value: String,
    pub disabled: bool,
    pub offset_top: f64,
    pub offset_height: f64,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    Navigate(String),
    ScrollTo { top: f64, mode: ScrollMode },
    ScrollIntoView(NodeId),
    Popup { url: String, features: String },
    ResetForm(NodeId),
}

#[derive(Default)]
struct MockState {
    nodes: Vec<MockNode>,
    storage: HashMap<String, String>,
    title: String,
    href: String,
    search: String,
    scroll_y: f64,
    ops: Vec<RecordedOp>,
}

pub struct MockDom {
    state: RefCell<MockState>,
}

const ROOT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// An empty document: `<html><body></body></html>` at
    /// `http://localhost/index.html`.
    pub fn new() -> Self {
        let dom = Self {
            state: RefCell::new(MockState {
                href: "http://localhost/index.html".to_string(),
                ..Default::default()
            }),
        };
        {
            let mut state = dom.state.borrow_mut();
            state.nodes.push(MockNode {
                tag: "html".to_string(),
                ..Default::default()
            });
            state.nodes.push(MockNode {
                tag: "body".to_string(),
                parent: Some(ROOT),
                ..Default::default()
            });
            state.nodes[ROOT.0].children.push(BODY);
        }
        dom
    }

    pub fn root_id(&self) -> NodeId {
        ROOT
    }

    pub fn body_id(&self) -> NodeId {
        BODY
    }

    /// Append a child described as `tag#id.class1.class2`.
    pub fn append(&self, parent: NodeId, notation: &str) -> NodeId {
        let node = parse_notation(notation);
        let mut state = self.state.borrow_mut();
        let id = NodeId(state.nodes.len());
        state.nodes.push(MockNode {
            parent: Some(parent),
            ..node
        });
        state.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_attr(&self, node: NodeId, name: &str, value: &str) -> NodeId {
        self.set_attribute(&node, name, value);
        node
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        self.state.borrow_mut().nodes[node.0].value = value.to_string();
    }

    pub fn set_offsets(&self, node: NodeId, top: f64, height: f64) {
        let mut state = self.state.borrow_mut();
        state.nodes[node.0].offset_top = top;
        state.nodes[node.0].offset_height = height;
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.state.borrow_mut().scroll_y = y;
    }

    pub fn set_location(&self, href: &str, search: &str) {
        let mut state = self.state.borrow_mut();
        state.href = href.to_string();
        state.search = search.to_string();
    }

    // -- inspection ---------------------------------------------------------

    pub fn node(&self, node: NodeId) -> MockNode {
        self.state.borrow().nodes[node.0].clone()
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.node(node).classes
    }

    pub fn text(&self, node: NodeId) -> String {
        self.node(node).text
    }

    pub fn html(&self, node: NodeId) -> String {
        self.node(node).html
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.node(node).style.get(property).cloned()
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.node(node).disabled
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let state = self.state.borrow();
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ROOT {
                return true;
            }
            cur = state.nodes[n.0].parent;
        }
        false
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.state.borrow().storage.get(key).cloned()
    }

    pub fn operations(&self) -> Vec<RecordedOp> {
        self.state.borrow().ops.clone()
    }

    fn record(&self, op: RecordedOp) {
        self.state.borrow_mut().ops.push(op);
    }

    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let state = self.state.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = state.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(state.nodes[n.0].children.iter().rev().copied());
        }
        out
    }

    fn detach_children(&self, node: NodeId) {
        let mut state = self.state.borrow_mut();
        let children = std::mem::take(&mut state.nodes[node.0].children);
        for child in children {
            state.nodes[child.0].parent = None;
        }
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .any(|complex| self.matches_complex(node, complex))
    }

    /// Descendant-combinator chains only (`nav a[href^="#"]`).
    fn matches_complex(&self, node: NodeId, complex: &str) -> bool {
        let parts: Vec<&str> = complex.split_whitespace().collect();
        let Some((last, ancestors)) = parts.split_last() else {
            return false;
        };
        if !self.matches_compound(node, last) {
            return false;
        }
        let state = self.state.borrow();
        let mut cur = state.nodes[node.0].parent;
        drop(state);
        let mut remaining = ancestors.len();
        while let Some(n) = cur {
            if remaining == 0 {
                break;
            }
            if self.matches_compound(n, ancestors[remaining - 1]) {
                remaining -= 1;
            }
            cur = self.state.borrow().nodes[n.0].parent;
        }
        remaining == 0
    }

    fn matches_compound(&self, node: NodeId, compound: &str) -> bool {
        let n = self.node(node);
        let (head, attr_part) = match compound.find('[') {
            Some(i) => (&compound[..i], Some(&compound[i..])),
            None => (compound, None),
        };
        let parsed = parse_notation(head);
        if !parsed.tag.is_empty() && parsed.tag != n.tag {
            return false;
        }
        if parsed.id.is_some() && parsed.id != n.id {
            return false;
        }
        if !parsed.classes.iter().all(|c| n.classes.contains(c)) {
            return false;
        }
        let Some(attr_part) = attr_part else {
            return true;
        };
        attr_part
            .split(']')
            .map(|s| s.trim_start_matches('['))
            .filter(|s| !s.is_empty())
            .all(|cond| {
                let value_of = |name: &str| {
                    if name == "id" {
                        n.id.clone()
                    } else {
                        n.attrs.get(name).cloned()
                    }
                };
                if let Some((name, expected)) = cond.split_once("^=") {
                    let expected = expected.trim_matches('"');
                    value_of(name).is_some_and(|v| v.starts_with(expected))
                } else if let Some((name, expected)) = cond.split_once('=') {
                    let expected = expected.trim_matches('"');
                    value_of(name).is_some_and(|v| v == expected)
                } else {
                    value_of(cond).is_some()
                }
            })
    }
}

/// Parse `tag#id.class1.class2`; every part is optional.
fn parse_notation(notation: &str) -> MockNode {
    let mut node = MockNode::default();
    let mut current = String::new();
    let mut kind = 't';
    let flush = |kind: char, value: &mut String, node: &mut MockNode| {
        if !value.is_empty() {
            match kind {
                '#' => node.id = Some(value.clone()),
                '.' => node.classes.push(value.clone()),
                _ => node.tag = value.clone(),
            }
        }
        value.clear();
    };
    for ch in notation.chars() {
        if ch == '#' || ch == '.' {
            flush(kind, &mut current, &mut node);
            kind = ch;
        } else {
            current.push(ch);
        }
    }
    flush(kind, &mut current, &mut node);
    node
}

impl DomBackend for MockDom {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let found = self
            .descendants(ROOT)
            .into_iter()
            .find(|n| self.state.borrow().nodes[n.0].id.as_deref() == Some(id));
        found
    }

    fn query_all(&self, scope: Option<&NodeId>, selector: &str) -> Vec<NodeId> {
        self.descendants(scope.copied().unwrap_or(ROOT))
            .into_iter()
            .filter(|n| self.matches(*n, selector))
            .collect()
    }

    fn root(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn parent(&self, el: &NodeId) -> Option<NodeId> {
        self.state.borrow().nodes[el.0].parent
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        let mut state = self.state.borrow_mut();
        let id = NodeId(state.nodes.len());
        state.nodes.push(MockNode {
            tag: tag.to_string(),
            ..Default::default()
        });
        Some(id)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        self.remove(child);
        let mut state = self.state.borrow_mut();
        state.nodes[child.0].parent = Some(*parent);
        state.nodes[parent.0].children.push(*child);
    }

    fn remove(&self, el: &NodeId) {
        let mut state = self.state.borrow_mut();
        if let Some(parent) = state.nodes[el.0].parent.take() {
            state.nodes[parent.0].children.retain(|c| c != el);
        }
    }

    fn set_text(&self, el: &NodeId, text: &str) {
        self.detach_children(*el);
        let mut state = self.state.borrow_mut();
        state.nodes[el.0].text = text.to_string();
        state.nodes[el.0].html.clear();
    }

    fn set_inner_html(&self, el: &NodeId, html: &str) {
        self.detach_children(*el);
        let mut state = self.state.borrow_mut();
        state.nodes[el.0].html = html.to_string();
        state.nodes[el.0].text.clear();
    }

    fn add_class(&self, el: &NodeId, class: &str) {
        let mut state = self.state.borrow_mut();
        let classes = &mut state.nodes[el.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, el: &NodeId, class: &str) {
        self.state.borrow_mut().nodes[el.0]
            .classes
            .retain(|c| c != class);
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.state.borrow().nodes[el.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        let state = self.state.borrow();
        let node = &state.nodes[el.0];
        match name {
            "id" => node.id.clone(),
            "class" => Some(node.classes.join(" ")),
            _ => node.attrs.get(name).cloned(),
        }
    }

    fn set_attribute(&self, el: &NodeId, name: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        let node = &mut state.nodes[el.0];
        match name {
            "id" => node.id = Some(value.to_string()),
            "class" => node.classes = value.split_whitespace().map(String::from).collect(),
            _ => {
                node.attrs.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn set_style(&self, el: &NodeId, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        let style = &mut state.nodes[el.0].style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_disabled(&self, el: &NodeId, disabled: bool) {
        self.state.borrow_mut().nodes[el.0].disabled = disabled;
    }

    fn value(&self, el: &NodeId) -> String {
        self.state.borrow().nodes[el.0].value.clone()
    }

    fn input_type(&self, el: &NodeId) -> String {
        let node = self.node(*el);
        match node.tag.as_str() {
            "textarea" => "textarea".to_string(),
            "input" => node
                .attrs
                .get("type")
                .map(|t| t.to_lowercase())
                .unwrap_or_else(|| "text".to_string()),
            _ => String::new(),
        }
    }

    fn reset_form(&self, form: &NodeId) {
        for field in self.query_all(Some(form), "input, textarea") {
            self.state.borrow_mut().nodes[field.0].value.clear();
        }
        self.record(RecordedOp::ResetForm(*form));
    }

    fn offset_top(&self, el: &NodeId) -> f64 {
        self.state.borrow().nodes[el.0].offset_top
    }

    fn offset_height(&self, el: &NodeId) -> f64 {
        self.state.borrow().nodes[el.0].offset_height
    }

    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn scroll_to(&self, top: f64, mode: ScrollMode) {
        self.record(RecordedOp::ScrollTo { top, mode });
    }

    fn scroll_into_view(&self, el: &NodeId, _mode: ScrollMode) {
        self.record(RecordedOp::ScrollIntoView(*el));
    }

    fn set_title(&self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    fn location_href(&self) -> String {
        self.state.borrow().href.clone()
    }

    fn location_search(&self) -> String {
        self.state.borrow().search.clone()
    }

    fn navigate(&self, url: &str) {
        self.record(RecordedOp::Navigate(url.to_string()));
    }

    fn open_popup(&self, url: &str, features: &str) {
        self.record(RecordedOp::Popup {
            url: url.to_string(),
            features: features.to_string(),
        });
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.state.borrow().storage.get(key).cloned()
    }

    fn storage_set(&self, key: &str, value: &str) {
        self.state
            .borrow_mut()
            .storage
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_notation_parses_tag_id_and_classes() {
        let node = parse_notation("button#submit-btn.btn.primary");
        assert_eq!(node.tag, "button");
        assert_eq!(node.id.as_deref(), Some("submit-btn"));
        assert_eq!(node.classes, vec!["btn", "primary"]);
    }

    #[test]
    fn query_matches_descendant_attribute_prefix() {
        let dom = MockDom::new();
        let nav = dom.append(dom.body_id(), "nav");
        let inside = dom.set_attr(dom.append(nav, "a"), "href", "#about");
        let outside = dom.set_attr(dom.append(dom.body_id(), "a"), "href", "#skills");
        dom.set_attr(dom.append(nav, "a"), "href", "/elsewhere");

        assert_eq!(dom.query_all(None, r##"nav a[href^="#"]"##), vec![inside]);
        assert_eq!(
            dom.query_all(None, r##"a[href^="#"]"##),
            vec![inside, outside]
        );
    }

    #[test]
    fn query_supports_selector_lists_in_document_order() {
        let dom = MockDom::new();
        let a = dom.append(dom.body_id(), "div.fade-in-left");
        let b = dom.append(dom.body_id(), "div.fade-in");
        assert_eq!(dom.query_all(None, ".fade-in, .fade-in-left"), vec![a, b]);
    }

    #[test]
    fn removed_nodes_are_not_found_by_id() {
        let dom = MockDom::new();
        let el = dom.append(dom.body_id(), "div#gone");
        dom.remove(&el);
        assert!(dom.element_by_id("gone").is_none());
        assert!(!dom.is_attached(el));
    }

    #[test]
    fn inner_html_detaches_previous_children() {
        let dom = MockDom::new();
        let container = dom.append(dom.body_id(), "div#c");
        let child = dom.append(container, "span#child");
        dom.set_inner_html(&container, "<p>new</p>");
        assert!(!dom.is_attached(child));
        assert_eq!(dom.html(container), "<p>new</p>");
    }
}
