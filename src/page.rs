//! Renderable page model.
//!
//! Pages are described as a tree of elements and text instead of being
//! written straight into a live document. Rendering code builds and mutates
//! this tree, and interaction is simulated through explicit event dispatch,
//! which keeps the fetch/translation/render logic testable without a browser.
//!
//! Event semantics follow the usual bubbling rules: a click starts at the
//! target and walks toward the root; a handler may stop propagation, and the
//! nearest enclosing link's navigation only fires when no handler prevented
//! the default.

use std::fmt::Write as _;

// ==================== Events ====================

/// What an event handler does when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate the whole page to the given URL.
    Navigate(String),
    /// Switch the active language to the control's current value.
    SwitchLanguage,
}

/// An event binding attached to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub action: Action,
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Handler {
    /// Create a handler that performs `action` without touching
    /// propagation or default behavior.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            prevent_default: false,
            stop_propagation: false,
        }
    }

    /// Suppress the default action of the nearest enclosing link.
    pub fn with_prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }

    /// Stop the event from reaching ancestor handlers.
    pub fn with_stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }
}

// ==================== Nodes ====================

/// One node in the page tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with a tag, attributes, children and optional event bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    pub on_click: Option<Handler>,
    pub on_change: Option<Handler>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            on_click: None,
            on_change: None,
        }
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: append a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder: append a text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Builder: attach a click handler.
    pub fn with_on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Builder: attach a change handler.
    pub fn with_on_change(mut self, handler: Handler) -> Self {
        self.on_change = Some(handler);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set or replace an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child node.
    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Remove all children.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.children.push(Node::Text(text.into()));
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Visit this element and every descendant element, depth first.
    pub fn for_each_element_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.for_each_element_mut(f);
            }
        }
    }

    /// Find the child-index path to the first descendant element matching
    /// the predicate, depth first. The path is relative to this element;
    /// an empty path means this element itself matched.
    pub fn find_path(&self, pred: &impl Fn(&Element) -> bool) -> Option<Vec<usize>> {
        if pred(self) {
            return Some(Vec::new());
        }
        for (i, child) in self.children.iter().enumerate() {
            if let Node::Element(el) = child {
                if let Some(mut rest) = el.find_path(pred) {
                    let mut path = vec![i];
                    path.append(&mut rest);
                    return Some(path);
                }
            }
        }
        None
    }

    /// Find the path to the element with the given `id` attribute.
    pub fn find_path_by_id(&self, id: &str) -> Option<Vec<usize>> {
        self.find_path(&|el| el.attr("id") == Some(id))
    }

    /// Borrow the node at a child-index path.
    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let (&first, rest) = path.split_first()?;
        let child = self.children.get(first)?;
        if rest.is_empty() {
            return Some(child);
        }
        match child {
            Node::Element(el) => el.node_at(rest),
            Node::Text(_) => None,
        }
    }

    /// Borrow the element at a child-index path. An empty path is this
    /// element itself.
    pub fn element_at(&self, path: &[usize]) -> Option<&Element> {
        if path.is_empty() {
            return Some(self);
        }
        match self.node_at(path)? {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Mutably borrow the element at a child-index path.
    pub fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let (&first, rest) = match path.split_first() {
            Some(split) => split,
            None => return Some(self),
        };
        match self.children.get_mut(first)? {
            Node::Element(el) => el.element_at_mut(rest),
            Node::Text(_) => None,
        }
    }

    /// Mutably borrow the first descendant element with the given `id`.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        let path = self.find_path_by_id(id)?;
        self.element_at_mut(&path)
    }

    /// Borrow the first descendant element with the given `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        let path = self.find_path_by_id(id)?;
        self.element_at(&path)
    }

    /// Simulate a click on the node at `path` and report where the page
    /// navigates, if anywhere.
    ///
    /// Handlers fire from the target outward. A `Navigate` action from a
    /// handler wins over link defaults; the innermost handler's navigation
    /// takes effect. When no handler navigates and none prevented the
    /// default, the nearest enclosing `a[href]` supplies the destination.
    ///
    /// # Returns
    /// `Some(url)` if the click results in a page navigation, `None`
    /// otherwise.
    pub fn dispatch_click(&self, path: &[usize]) -> Option<String> {
        let mut chain: Vec<&Element> = vec![self];
        let mut current: &Element = self;
        for (depth, &idx) in path.iter().enumerate() {
            match current.children.get(idx)? {
                Node::Element(el) => {
                    chain.push(el);
                    current = el;
                }
                // A text node can only be the click target itself, in which
                // case the event fires on its parent element.
                Node::Text(_) => {
                    if depth + 1 == path.len() {
                        break;
                    }
                    return None;
                }
            }
        }

        let mut default_prevented = false;
        let mut navigation: Option<String> = None;
        for el in chain.iter().rev() {
            if let Some(handler) = &el.on_click {
                if handler.prevent_default {
                    default_prevented = true;
                }
                if navigation.is_none() {
                    if let Action::Navigate(url) = &handler.action {
                        navigation = Some(url.clone());
                    }
                }
                if handler.stop_propagation {
                    break;
                }
            }
        }

        if navigation.is_some() {
            return navigation;
        }
        if !default_prevented {
            for el in chain.iter().rev() {
                if el.tag == "a" {
                    if let Some(href) = el.attr("href") {
                        return Some(href.to_string());
                    }
                }
            }
        }
        None
    }

    /// Fire the change handler of the element at `path`, if it has one.
    pub fn dispatch_change(&self, path: &[usize]) -> Option<&Action> {
        self.element_at(path)?.on_change.as_ref().map(|h| &h.action)
    }

    /// Serialize this element and its subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

// ==================== Serialization ====================

/// Elements that never carry children and close themselves.
const VOID_TAGS: [&str; 6] = ["img", "input", "br", "hr", "meta", "link"];

fn write_element(el: &Element, out: &mut String) {
    let _ = write!(out, "<{}", el.tag);
    for (name, value) in &el.attrs {
        let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
    }
    out.push('>');
    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(inner) => write_element(inner, out),
        }
    }
    let _ = write!(out, "</{}>", el.tag);
}

/// Escape text for safe inclusion in HTML content or attribute values.
///
/// Entry titles and tags come from an external feed, so anything rendered
/// into markup must be escaped: `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

// ==================== Document ====================

/// A whole page: the head's title element plus the body tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: Element,
    body: Element,
}

impl Document {
    /// Create a document from a title element and a body element.
    pub fn new(title: Element, body: Element) -> Self {
        Self { title, body }
    }

    pub fn title_element(&self) -> &Element {
        &self.title
    }

    pub fn title_element_mut(&mut self) -> &mut Element {
        &mut self.title
    }

    /// The rendered document title.
    pub fn title(&self) -> String {
        self.title.text_content()
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// Serialize the full document to HTML.
    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html><html><head>{}</head>{}</html>",
            self.title.to_html(),
            self.body.to_html()
        )
    }
}

/// The monthly catalog page shell: heading, language selector and the
/// (initially empty) video list container, with translation keys on the
/// pieces whose text is localized.
pub fn catalog_shell() -> Document {
    let title = Element::new("title")
        .with_attr("data-i18n", "site_title")
        .with_text("Video Catalog");

    let body = Element::new("body")
        .with_child(
            Element::new("a")
                .with_attr("class", "back-to-prev-button")
                .with_attr("href", "../index.html")
                .with_attr("data-i18n", "back_button")
                .with_text("Back"),
        )
        .with_child(
            Element::new("h1")
                .with_attr("data-i18n", "catalog_heading")
                .with_text("Monthly Videos"),
        )
        .with_child(
            Element::new("input")
                .with_attr("id", "search-input")
                .with_attr("type", "text")
                .with_attr("data-i18n-placeholder", "search_placeholder")
                .with_attr("placeholder", "Search"),
        )
        .with_child(Element::new("select").with_attr("id", "language-select"))
        .with_child(Element::new("div").with_attr("id", "video-list"));

    Document::new(title, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Builder Tests ====================

    #[test]
    fn test_element_builder() {
        let el = Element::new("div")
            .with_attr("class", "video-item")
            .with_text("hello");

        assert_eq!(el.tag(), "div");
        assert_eq!(el.attr("class"), Some("video-item"));
        assert_eq!(el.children().len(), 1);
        assert_eq!(el.text_content(), "hello");
    }

    #[test]
    fn test_set_attr_replaces_existing() {
        let mut el = Element::new("select").with_attr("value", "en");
        el.set_attr("value", "jp");

        assert_eq!(el.attr("value"), Some("jp"));
        assert_eq!(
            el.to_html().matches("value=").count(),
            1,
            "Replacing should not duplicate the attribute"
        );
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut el = Element::new("p")
            .with_text("old")
            .with_child(Element::new("span").with_text("nested"));

        el.set_text("new");
        assert_eq!(el.children().len(), 1);
        assert_eq!(el.text_content(), "new");
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let el = Element::new("div")
            .with_text("a")
            .with_child(Element::new("span").with_text("b"))
            .with_text("c");

        assert_eq!(el.text_content(), "abc");
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_find_by_id() {
        let root = Element::new("body")
            .with_child(Element::new("div").with_attr("id", "other"))
            .with_child(
                Element::new("div")
                    .with_attr("id", "video-list")
                    .with_text("inside"),
            );

        let found = root.find_by_id("video-list").expect("Should find");
        assert_eq!(found.text_content(), "inside");
        assert!(root.find_by_id("missing").is_none());
    }

    #[test]
    fn test_find_path_and_element_at_agree() {
        let root = Element::new("body").with_child(
            Element::new("div").with_child(Element::new("span").with_attr("id", "deep")),
        );

        let path = root.find_path_by_id("deep").expect("Should find path");
        assert_eq!(path, vec![0, 0]);
        let el = root.element_at(&path).expect("Should resolve path");
        assert_eq!(el.tag(), "span");
    }

    #[test]
    fn test_element_at_empty_path_is_self() {
        let root = Element::new("body");
        assert_eq!(root.element_at(&[]).unwrap().tag(), "body");
    }

    #[test]
    fn test_for_each_element_mut_visits_all() {
        let mut root = Element::new("body")
            .with_child(Element::new("div").with_child(Element::new("span")))
            .with_child(Element::new("p"));

        let mut tags = Vec::new();
        root.for_each_element_mut(&mut |el| tags.push(el.tag().to_string()));
        assert_eq!(tags, vec!["body", "div", "span", "p"]);
    }

    // ==================== Click Dispatch Tests ====================

    #[test]
    fn test_click_on_anchor_navigates_to_href() {
        let root = Element::new("div").with_child(
            Element::new("a")
                .with_attr("href", "https://example.com/watch")
                .with_text("open"),
        );

        let nav = root.dispatch_click(&[0]);
        assert_eq!(nav, Some("https://example.com/watch".to_string()));
    }

    #[test]
    fn test_click_inside_anchor_bubbles_to_href() {
        let root = Element::new("div").with_child(
            Element::new("a")
                .with_attr("href", "https://example.com/watch")
                .with_child(Element::new("img").with_attr("src", "thumb.jpg")),
        );

        // Target the image; navigation comes from the enclosing link.
        let nav = root.dispatch_click(&[0, 0]);
        assert_eq!(nav, Some("https://example.com/watch".to_string()));
    }

    #[test]
    fn test_handler_navigation_beats_anchor_default() {
        let chip = Element::new("span")
            .with_on_click(
                Handler::new(Action::Navigate("search.html?tag=funny".to_string()))
                    .with_prevent_default()
                    .with_stop_propagation(),
            )
            .with_text("Funny");
        let root = Element::new("a")
            .with_attr("href", "https://example.com/watch")
            .with_child(chip);

        let nav = root.dispatch_click(&[0]);
        assert_eq!(nav, Some("search.html?tag=funny".to_string()));
    }

    #[test]
    fn test_prevent_default_without_navigation_goes_nowhere() {
        let root = Element::new("a")
            .with_attr("href", "https://example.com/watch")
            .with_child(
                Element::new("span")
                    .with_on_click(Handler::new(Action::SwitchLanguage).with_prevent_default()),
            );

        assert_eq!(root.dispatch_click(&[0]), None);
    }

    #[test]
    fn test_stop_propagation_shields_outer_handler() {
        let inner = Element::new("span")
            .with_on_click(
                Handler::new(Action::Navigate("inner.html".to_string())).with_stop_propagation(),
            )
            .with_text("inner");
        let root = Element::new("div")
            .with_on_click(Handler::new(Action::Navigate("outer.html".to_string())))
            .with_child(inner);

        assert_eq!(root.dispatch_click(&[0]), Some("inner.html".to_string()));
    }

    #[test]
    fn test_innermost_handler_navigation_wins() {
        let inner = Element::new("span")
            .with_on_click(Handler::new(Action::Navigate("inner.html".to_string())))
            .with_text("inner");
        let root = Element::new("div")
            .with_on_click(Handler::new(Action::Navigate("outer.html".to_string())))
            .with_child(inner);

        assert_eq!(root.dispatch_click(&[0]), Some("inner.html".to_string()));
    }

    #[test]
    fn test_click_on_text_child_fires_parent_handlers() {
        let root = Element::new("a")
            .with_attr("href", "https://example.com/watch")
            .with_text("label");

        // Path ends on the text node; the anchor still handles the click.
        let nav = root.dispatch_click(&[0]);
        assert_eq!(nav, Some("https://example.com/watch".to_string()));
    }

    #[test]
    fn test_click_invalid_path_is_noop() {
        let root = Element::new("div");
        assert_eq!(root.dispatch_click(&[3]), None);
    }

    // ==================== Change Dispatch Tests ====================

    #[test]
    fn test_dispatch_change_returns_action() {
        let root = Element::new("body").with_child(
            Element::new("select")
                .with_attr("id", "language-select")
                .with_on_change(Handler::new(Action::SwitchLanguage)),
        );

        let path = root.find_path_by_id("language-select").unwrap();
        assert_eq!(root.dispatch_change(&path), Some(&Action::SwitchLanguage));
    }

    #[test]
    fn test_dispatch_change_without_handler() {
        let root = Element::new("body").with_child(Element::new("select"));
        assert_eq!(root.dispatch_change(&[0]), None);
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_to_html_escapes_text_and_attrs() {
        let el = Element::new("p")
            .with_attr("title", "a\"b")
            .with_text("<script>&");

        let html = el.to_html();
        assert_eq!(html, "<p title=\"a&quot;b\">&lt;script&gt;&amp;</p>");
    }

    #[test]
    fn test_to_html_void_elements_have_no_closing_tag() {
        let el = Element::new("img").with_attr("src", "thumb.jpg");
        assert_eq!(el.to_html(), "<img src=\"thumb.jpg\">");
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text 繁體中文"), "plain text 繁體中文");
    }

    // ==================== Document Tests ====================

    #[test]
    fn test_catalog_shell_structure() {
        let doc = catalog_shell();
        assert!(doc.body().find_by_id("video-list").is_some());
        assert!(doc.body().find_by_id("language-select").is_some());
        assert_eq!(doc.title_element().attr("data-i18n"), Some("site_title"));
        assert_eq!(doc.title(), "Video Catalog");
    }

    #[test]
    fn test_document_to_html_wraps_title_and_body() {
        let doc = Document::new(
            Element::new("title").with_text("T"),
            Element::new("body").with_text("B"),
        );
        assert_eq!(
            doc.to_html(),
            "<!DOCTYPE html><html><head><title>T</title></head><body>B</body></html>"
        );
    }
}
