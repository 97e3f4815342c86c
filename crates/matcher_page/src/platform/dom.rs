//! Minimal in-memory document: enough element state for the page controller
//! to read inputs and apply its effects.

use std::collections::BTreeMap;

use matcher_core::SelectedFile;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Inline style properties the controller touches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    pub width: Option<String>,
    pub transition: Option<String>,
    pub display: Option<String>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    /// Markup owned by this node itself; child elements live in `children`.
    pub inner_html: String,
    pub value: String,
    pub files: Vec<SelectedFile>,
    pub disabled: bool,
    pub style: Style,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            inner_html: String::new(),
            value: String::new(),
            files: Vec::new(),
            disabled: false,
            style: Style::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Adds space-separated classes.
    pub fn with_class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(ToOwned::to_owned));
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_html(mut self, html: &str) -> Self {
        self.inner_html = html.to_string();
        self
    }

    pub fn with_width(mut self, width: &str) -> Self {
        self.style.width = Some(width.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// A document rooted at `<body>`.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
    location: Url,
    selection: Option<NodeId>,
    copied: Option<String>,
    /// Targets of smooth `scrollIntoView` calls, oldest first.
    scrolls: Vec<NodeId>,
}

impl Document {
    pub fn new(location: Url) -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
            location,
            selection: None,
            copied: None,
            scrolls: Vec::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Resolves `href` against the current location and navigates there.
    pub fn navigate(&mut self, href: &str) -> Result<&Url, url::ParseError> {
        self.location = self.location.join(href)?;
        Ok(&self.location)
    }

    /// Creates a detached element. Nodes are never freed: removed elements
    /// stay in the arena until the document is dropped, so ids stay valid.
    pub fn create(&mut self, element: Element) -> NodeId {
        self.nodes.push(element);
        NodeId(self.nodes.len() - 1)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn insert_first(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    /// Creates `element` and appends it under `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let node = self.create(element);
        self.append_child(parent, node);
        node
    }

    /// Detaches `node` from its parent. Returns false if it had none.
    pub fn remove(&mut self, node: NodeId) -> bool {
        self.detach(node)
    }

    fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.nodes[node.0].parent.take() else {
            return false;
        };
        self.nodes[parent.0].children.retain(|child| *child != node);
        if self.selection == Some(node) {
            self.selection = None;
        }
        true
    }

    /// Looks up a node that may belong to another document.
    pub fn try_get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub fn get(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    pub fn get_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// True when `node` is reachable from `<body>`.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.body {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Attached descendants of `root` in document order, `root` excluded.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    pub fn find_in<F>(&self, root: NodeId, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants(root)
            .into_iter()
            .filter(|node| predicate(self.get(*node)))
            .collect()
    }

    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.find_in(self.body, |element| element.has_class(class))
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_in(self.body, |element| element.id.as_deref() == Some(id))
            .into_iter()
            .next()
    }

    /// Visible text of `node` and its children, tags stripped.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = strip_tags(&self.get(node).inner_html);
        for child in self.children(node) {
            text.push_str(&self.text_content(*child));
        }
        text
    }

    pub fn select(&mut self, node: NodeId) {
        self.selection = Some(node);
    }

    /// Legacy copy command: puts the selected field's value on the clipboard.
    pub fn exec_copy(&mut self) -> bool {
        match self.selection {
            Some(node) if self.is_attached(node) => {
                self.copied = Some(self.get(node).value.clone());
                true
            }
            _ => false,
        }
    }

    /// Text last placed on the clipboard through `exec_copy`.
    pub fn copied_text(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    pub fn smooth_scroll_into_view(&mut self, target: NodeId) {
        self.scrolls.push(target);
    }

    pub fn scrolls(&self) -> &[NodeId] {
        &self.scrolls
    }

    /// Indented outline of the attached tree, for logs and debugging.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_node(self.body, 0, &mut out);
        out
    }

    fn outline_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let element = self.get(node);
        out.push_str(&"  ".repeat(depth));
        out.push('<');
        out.push_str(&element.tag);
        if let Some(id) = &element.id {
            out.push_str(&format!(" id=\"{id}\""));
        }
        if !element.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", element.classes.join(" ")));
        }
        if let Some(width) = &element.style.width {
            out.push_str(&format!(" style=\"width: {width}\""));
        }
        out.push('>');
        let text = strip_tags(&element.inner_html);
        if !text.trim().is_empty() {
            out.push(' ');
            out.push_str(text.trim());
        }
        out.push('\n');
        for child in self.children(node) {
            self.outline_node(*child, depth + 1, out);
        }
    }
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
