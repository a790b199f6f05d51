//! Core model types: nodes, links, indices and node kinds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Position of a node inside its [`SemanticGraph`](super::SemanticGraph).
pub type NodeIndex = usize;

/// Position of a link inside its [`SemanticGraph`](super::SemanticGraph).
pub type LinkIndex = usize;

/// Kind of a node in a semantic model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Instance of an ontology class
    Internal,
    /// Attribute of the source being modeled
    Column {
        /// Name of the source column
        column_name: String,
    },
    /// Constant value
    Literal {
        /// The literal value
        value: String,
    },
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Internal => write!(f, "Internal"),
            NodeKind::Column { .. } => write!(f, "Column"),
            NodeKind::Literal { .. } => write!(f, "Literal"),
        }
    }
}

/// A node of a semantic model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, usually a URI
    pub id: String,
    /// Internal, column or literal
    pub kind: NodeKind,
    /// Candidate models this node belongs to
    #[serde(default)]
    pub model_ids: BTreeSet<String>,
}

impl Node {
    /// Create a node without provenance tags.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            model_ids: BTreeSet::new(),
        }
    }

    /// Builder pattern: tag the node with model ids.
    pub fn with_model_ids<I, S>(mut self, model_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model_ids.extend(model_ids.into_iter().map(Into::into));
        self
    }

    /// Column name, for column nodes.
    pub fn column_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Column { column_name } => Some(column_name),
            _ => None,
        }
    }

    /// Whether this is a column node.
    pub fn is_column(&self) -> bool {
        matches!(self.kind, NodeKind::Column { .. })
    }
}

/// A directed, weighted link between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Identifier of the link
    pub id: String,
    /// Property URI labeling the link
    #[serde(default)]
    pub uri: Option<String>,
    /// Source node
    pub source: NodeIndex,
    /// Target node
    pub target: NodeIndex,
    /// Non-negative cost of the link
    pub weight: f64,
    /// Candidate models this link belongs to
    #[serde(default)]
    pub model_ids: BTreeSet<String>,
}

impl Link {
    /// Create an untagged link without a URI.
    pub fn new(id: impl Into<String>, source: NodeIndex, target: NodeIndex, weight: f64) -> Self {
        Self {
            id: id.into(),
            uri: None,
            source,
            target,
            weight,
            model_ids: BTreeSet::new(),
        }
    }

    /// Builder pattern: set the property URI.
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Builder pattern: tag the link with model ids.
    pub fn with_model_ids<I, S>(mut self, model_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model_ids.extend(model_ids.into_iter().map(Into::into));
        self
    }

    /// A pattern link carries at least one model id.
    pub fn is_pattern(&self) -> bool {
        !self.model_ids.is_empty()
    }
}
