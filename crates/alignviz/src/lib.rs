//! # alignviz
//!
//! Graphviz export for semantic model alignment graphs.
//!
//! A semantic model is a directed, weighted multigraph whose nodes are internal
//! (ontology class instances), column (source attributes) or literal nodes, and
//! whose links may be tagged with the ids of the candidate models they belong to.
//! This crate turns such graphs into a DOT document for inspection and debugging.
//!
//! ## Architecture
//!
//! ```text
//! SemanticGraph / SemanticModel   (model)
//!     ↓
//! GraphExporter                   (decide what to draw)
//!     ↓
//! Document                        (immutable value tree)
//!     ↓
//! dot / json serializers, writer  (emit text)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use alignviz::{ExportOptions, GraphExporter, NodeKind, SemanticGraph};
//!
//! let mut graph = SemanticGraph::new();
//! let person = graph.add_node("http://xmlns.com/foaf/0.1/Person1", NodeKind::Internal);
//! let name = graph.add_node(
//!     "HN42",
//!     NodeKind::Column { column_name: "name".to_string() },
//! );
//! graph
//!     .add_link(person, name, "l1", Some("http://xmlns.com/foaf/0.1/name"), 1.0)
//!     .unwrap();
//!
//! let document = GraphExporter::new().export_single(
//!     Some(&graph),
//!     Some("people"),
//!     &ExportOptions::default(),
//! );
//! let dot = alignviz::export::to_dot(&document);
//! assert!(dot.starts_with("digraph {"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod model;

// Re-export main types
pub use error::{Result, VizError};
pub use export::{
    Document, EdgeDecl, ExportOptions, GraphExporter, NodeDecl, NodeHandle, Style, StyleSheet,
};
pub use model::{
    ColumnMapping, Link, LinkIndex, Node, NodeIndex, NodeKind, SemanticGraph, SemanticModel,
};
