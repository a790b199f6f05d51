//! Directed weighted multigraph over semantic model nodes.

use super::types::{Link, LinkIndex, Node, NodeIndex, NodeKind};
use crate::error::{Result, VizError};
use log::trace;
use serde::{Deserialize, Serialize};

/// A directed, weighted multigraph of [`Node`]s and [`Link`]s.
///
/// Nodes and links keep their insertion order, which is also the order the
/// exporter scans them in. Any number of links may join the same ordered pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemanticGraph {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl SemanticGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without provenance tags and return its index.
    pub fn add_node(&mut self, id: impl Into<String>, kind: NodeKind) -> NodeIndex {
        self.insert_node(Node::new(id, kind))
    }

    /// Add a fully built node and return its index.
    pub fn insert_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len();
        trace!("Adding node: index={index}, id={}, kind={}", node.id, node.kind);
        self.nodes.push(node);
        index
    }

    /// Add an untagged link between two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::NodeNotFound`] if either endpoint is not in the graph,
    /// or [`VizError::InvalidWeight`] if the weight is negative, infinite or not a
    /// number.
    pub fn add_link(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        id: impl Into<String>,
        uri: Option<&str>,
        weight: f64,
    ) -> Result<LinkIndex> {
        let mut link = Link::new(id, source, target, weight);
        link.uri = uri.map(str::to_string);
        self.insert_link(link)
    }

    /// Add a fully built link.
    ///
    /// # Errors
    ///
    /// Same as [`SemanticGraph::add_link`].
    pub fn insert_link(&mut self, link: Link) -> Result<LinkIndex> {
        self.check_link(&link)?;
        let index = self.links.len();
        trace!(
            "Adding link: index={index}, id={}, {} -> {}",
            link.id,
            link.source,
            link.target
        );
        self.links.push(link);
        Ok(index)
    }

    /// Get a node by index.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Get a link by index.
    pub fn link(&self, index: LinkIndex) -> Option<&Link> {
        self.links.get(index)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All links in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Links paired with their endpoint nodes.
    pub fn links_with_endpoints(&self) -> impl Iterator<Item = (&Link, &Node, &Node)> + '_ {
        self.links.iter().filter_map(move |link| {
            let source = self.nodes.get(link.source)?;
            let target = self.nodes.get(link.target)?;
            Some((link, source, target))
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check every link against the node table.
    ///
    /// Graphs built through `add_link` are always valid; this is for graphs
    /// that were deserialized.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, as [`SemanticGraph::add_link`] would.
    pub fn validate(&self) -> Result<()> {
        self.links.iter().try_for_each(|link| self.check_link(link))
    }

    fn check_link(&self, link: &Link) -> Result<()> {
        for index in [link.source, link.target] {
            if index >= self.nodes.len() {
                return Err(VizError::NodeNotFound { index });
            }
        }
        if !link.weight.is_finite() || link.weight < 0.0 {
            return Err(VizError::InvalidWeight {
                link_id: link.id.clone(),
                weight: link.weight,
            });
        }
        Ok(())
    }
}
