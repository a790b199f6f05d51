//! Export options and default styles.

use super::document::Style;
use serde::{Deserialize, Serialize};

/// Flags controlling which links are drawn and which annotations are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Skip links that carry no model id
    #[serde(default)]
    pub only_pattern_edges: bool,

    /// Append node model ids to node labels
    #[serde(default)]
    pub show_node_metadata: bool,

    /// Append weight and model ids to link labels
    #[serde(default)]
    pub show_link_metadata: bool,
}

impl ExportOptions {
    /// Draw only pattern links, without annotations.
    pub fn patterns_only() -> Self {
        Self {
            only_pattern_edges: true,
            ..Default::default()
        }
    }

    /// Draw every link with node and link annotations.
    pub fn with_metadata() -> Self {
        Self {
            show_node_metadata: true,
            show_link_metadata: true,
            ..Default::default()
        }
    }

    /// Set the pattern link filter
    pub fn only_pattern_edges(mut self, only_pattern_edges: bool) -> Self {
        self.only_pattern_edges = only_pattern_edges;
        self
    }

    /// Toggle node annotations
    pub fn show_node_metadata(mut self, show: bool) -> Self {
        self.show_node_metadata = show;
        self
    }

    /// Toggle link annotations
    pub fn show_link_metadata(mut self, show: bool) -> Self {
        self.show_link_metadata = show;
        self
    }
}

/// Styles applied to each node kind and to links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Internal (class instance) nodes
    pub internal: Style,
    /// Column nodes
    pub column: Style,
    /// Literal nodes
    pub literal: Style,
    /// Links
    pub link: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            internal: Style::new()
                .attr("style", "filled")
                .attr("color", "white")
                .attr("fillcolor", "lightgray"),
            column: Style::new()
                .attr("shape", "plaintext")
                .attr("style", "filled")
                .attr("fillcolor", "gold"),
            literal: Style::new()
                .attr("shape", "plaintext")
                .attr("style", "filled")
                .attr("fillcolor", "#CC7799"),
            link: Style::new().attr("color", "brown").attr("fontcolor", "black"),
        }
    }
}
