//! Module: dom
//! Responsibility: arena-backed markup tree, element handles, and markup
//! serialization.
//! Does not own: selector evaluation or matching semantics.
//! Boundary: the document collaborator consumed by the `select` layer.
//!
//! Invariants:
//! - Every node except the root has a parent, and appears exactly once in
//!   that parent's child list.
//! - Parents are always element nodes; text nodes are leaves.
//! - `NodeId`s are only valid for the document that issued them.

mod name;


pub use name::{TagName, TagNameError};

use std::fmt::{self, Display, Write};

///
/// NodeId
///
/// Arena index for one node. Opaque outside this module.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

///
/// NodeKind
///

#[derive(Clone, Debug)]
enum NodeKind {
    Element(ElementData),
    Text(String),
}

///
/// ElementData
///

#[derive(Clone, Debug)]
struct ElementData {
    name: TagName,
    // Insertion-ordered; keys are unique (set_attr overwrites in place).
    attrs: Vec<(String, String)>,
}

///
/// NodeData
///

#[derive(Clone, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

///
/// Document
///
/// Arena of nodes rooted at a single element. Construction is append-only;
/// nodes are never removed or reparented.
///

#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create a document holding a single root element.
    #[must_use]
    pub fn new(root: TagName) -> Self {
        Self {
            nodes: vec![NodeData {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Element(ElementData {
                    name: root,
                    attrs: Vec::new(),
                }),
            }],
        }
    }

    /// Id of the root element.
    #[must_use]
    pub const fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Handle to the root element.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.element(self.root_id())
    }

    /// Append a new element under `parent` and return its id.
    ///
    /// Panics if `parent` is not an element node.
    pub fn append_element(&mut self, parent: NodeId, name: TagName) -> NodeId {
        self.assert_element(parent);
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent),
            children: Vec::new(),
            kind: NodeKind::Element(ElementData {
                name,
                attrs: Vec::new(),
            }),
        });
        self.nodes[parent.0].children.push(id);

        id
    }

    /// Append a text node under `parent` and return its id.
    ///
    /// Panics if `parent` is not an element node.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.assert_element(parent);
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent),
            children: Vec::new(),
            kind: NodeKind::Text(text.into()),
        });
        self.nodes[parent.0].children.push(id);

        id
    }

    /// Set (or overwrite) one attribute on an element.
    ///
    /// Panics if `id` is not an element node.
    pub fn set_attr(&mut self, id: NodeId, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let NodeKind::Element(data) = &mut self.nodes[id.0].kind else {
            panic!("set_attr: node {id:?} is not an element");
        };

        match data.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => data.attrs.push((key, value)),
        }
    }

    /// Handle to the element at `id`.
    ///
    /// Panics if `id` is not an element node.
    #[must_use]
    pub fn element(&self, id: NodeId) -> ElementRef<'_> {
        self.assert_element(id);

        ElementRef { doc: self, id }
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn assert_element(&self, id: NodeId) {
        assert!(
            matches!(self.node(id).kind, NodeKind::Element(_)),
            "node {id:?} is not an element"
        );
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root().outer_html())
    }
}

///
/// ElementRef
///
/// Copyable handle to one element node. Handles from different documents
/// never compare equal.
///

#[derive(Clone, Copy, Debug)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> ElementRef<'a> {
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    fn data(&self) -> &'a ElementData {
        match &self.doc.node(self.id).kind {
            NodeKind::Element(data) => data,
            NodeKind::Text(_) => unreachable!("ElementRef points at a text node"),
        }
    }

    /// Lowercase tag name of this element.
    #[must_use]
    pub fn tag_name(&self) -> &'a str {
        self.data().name.as_str()
    }

    /// Attribute value, if the attribute is present.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.data()
            .attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attr(key).is_some()
    }

    /// Whether the `class` attribute, split on ASCII whitespace, contains
    /// `name`. Class names compare case-sensitively.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == name))
    }

    /// Parent element, or `None` on the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let parent = self.doc.node(self.id).parent?;

        Some(self.doc.element(parent))
    }

    /// Child elements in document order. Text children are skipped.
    pub fn children(&self) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        let doc = self.doc;

        doc.node(self.id)
            .children
            .iter()
            .filter(|id| matches!(doc.node(**id).kind, NodeKind::Element(_)))
            .map(|id| ElementRef { doc, id: *id })
    }

    /// Nearest preceding sibling that is an element, if any.
    #[must_use]
    pub fn prev_sibling_element(&self) -> Option<Self> {
        let parent = self.doc.node(self.id).parent?;
        let siblings = &self.doc.node(parent).children;
        let pos = siblings
            .iter()
            .position(|id| *id == self.id)
            .unwrap_or_else(|| unreachable!("node missing from its parent's child list"));

        siblings[..pos]
            .iter()
            .rev()
            .find(|id| matches!(self.doc.node(**id).kind, NodeKind::Element(_)))
            .map(|id| self.doc.element(*id))
    }

    /// Depth-first walk of this element's subtree, in document order,
    /// starting with this element itself.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants {
            doc: self.doc,
            stack: vec![self.id],
        }
    }

    /// Serialize this element's subtree to markup text.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        serialize(self.doc, self.id, &mut out);

        out
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for ElementRef<'_> {}

///
/// Descendants
///
/// Depth-first element iterator over one subtree, origin first.
///

#[derive(Debug)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.doc.node(id);

        // Reversed push keeps document order on pop.
        self.stack.extend(
            node.children
                .iter()
                .rev()
                .filter(|child| matches!(self.doc.node(**child).kind, NodeKind::Element(_)))
                .copied(),
        );

        Some(ElementRef { doc: self.doc, id })
    }
}

// Serialize one subtree. Text nodes escape markup metacharacters; attribute
// values escape ampersands and double quotes.
fn serialize(doc: &Document, id: NodeId, out: &mut String) {
    let node = doc.node(id);

    match &node.kind {
        NodeKind::Text(text) => escape_text(text, out),
        NodeKind::Element(data) => {
            out.push('<');
            out.push_str(data.name.as_str());
            for (key, value) in &data.attrs {
                let _ = write!(out, " {key}=\"");
                escape_attr(value, out);
                out.push('"');
            }
            out.push('>');
            for child in &node.children {
                serialize(doc, *child, out);
            }
            out.push_str("</");
            out.push_str(data.name.as_str());
            out.push('>');
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
