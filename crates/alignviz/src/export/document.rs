//! Immutable description of what to draw.
//!
//! A [`Document`] is produced by the exporter with every label and style fully
//! resolved, then handed to a serializer. Nothing in here knows about DOT syntax.

use serde::{Deserialize, Serialize};

/// Ordered set of visual attributes (`shape`, `fillcolor`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    attrs: Vec<(String, String)>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set an attribute, replacing an earlier value for the same key.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an attribute in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Get an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// True if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Reference to a node declared in the same [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Position of the declaration in [`Document::nodes`].
    pub fn index(self) -> usize {
        self.0
    }
}

/// A styled, labeled node declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDecl {
    /// Text shown for the node
    pub label: String,
    /// Visual attributes
    pub style: Style,
}

/// A styled, labeled directed edge between two declared nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDecl {
    /// Tail of the edge
    pub source: NodeHandle,
    /// Head of the edge
    pub target: NodeHandle,
    /// Text shown on the edge
    pub label: String,
    /// Visual attributes
    pub style: Style,
}

/// A graph to be rendered: attributes, declarations and nested clusters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: Option<String>,
    attributes: Style,
    nodes: Vec<NodeDecl>,
    edges: Vec<EdgeDecl>,
    subgraphs: Vec<Document>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the graph id (`cluster_0`, ...).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder pattern: set a graph-level attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Builder pattern: append a nested cluster.
    pub fn with_subgraph(mut self, subgraph: Document) -> Self {
        self.subgraphs.push(subgraph);
        self
    }

    pub(crate) fn declare_node(&mut self, decl: NodeDecl) -> NodeHandle {
        self.nodes.push(decl);
        NodeHandle(self.nodes.len() - 1)
    }

    pub(crate) fn declare_edge(&mut self, decl: EdgeDecl) {
        self.edges.push(decl);
    }

    /// Graph id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Graph-level attributes.
    pub fn attributes(&self) -> &Style {
        &self.attributes
    }

    /// Value of the `label` attribute.
    pub fn label(&self) -> Option<&str> {
        self.attributes.get("label")
    }

    /// Node declarations in first-encounter order.
    pub fn nodes(&self) -> &[NodeDecl] {
        &self.nodes
    }

    /// Edge declarations in scan order.
    pub fn edges(&self) -> &[EdgeDecl] {
        &self.edges
    }

    /// Nested clusters in insertion order.
    pub fn subgraphs(&self) -> &[Document] {
        &self.subgraphs
    }

    /// Look up the declaration behind a handle.
    pub fn node(&self, handle: NodeHandle) -> Option<&NodeDecl> {
        self.nodes.get(handle.0)
    }

    /// True if there is nothing to draw at this level or below.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.subgraphs.iter().all(Self::is_empty)
    }
}
