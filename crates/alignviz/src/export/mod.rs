//! Export of semantic graphs for visualization in external tools.
//!
//! Conversion and serialization are separate steps:
//! - [`GraphExporter`] decides what to draw and builds a [`Document`]
//! - [`dot`] turns a document into Graphviz DOT text
//! - [`json`] writes the same tree as JSON
//! - [`writer`] sends DOT to streams and files

pub mod config;
pub mod document;
pub mod dot;
pub mod exporter;
pub mod json;
pub mod label;
pub mod writer;

pub use config::{ExportOptions, StyleSheet};
pub use document::{Document, EdgeDecl, NodeDecl, NodeHandle, Style};
pub use dot::to_dot;
pub use exporter::{GraphExporter, CORRECT_MODEL_NAME};
pub use json::to_json;
pub use label::{
    display_label, extract_local_name, format_model_ids, format_weight, round_two_decimals,
};
pub use writer::{
    export_graph_to_file, export_model_collection_to_file, export_model_to_file, write_dot,
    write_dot_file,
};
