//! Semantic model graph types.
//!
//! This module defines the graph the exporter reads:
//! - [`Node`]: internal, column or literal nodes with provenance tags
//! - [`Link`]: weighted, directed relationships between nodes
//! - [`SemanticGraph`]: a directed weighted multigraph over both
//! - [`SemanticModel`]: a named graph plus its column mapping

mod graph;
mod semantic_model;
mod types;

pub use graph::SemanticGraph;
pub use semantic_model::{ColumnMapping, SemanticModel};
pub use types::{Link, LinkIndex, Node, NodeIndex, NodeKind};
