//! Named semantic models and their column mappings.

use super::graph::SemanticGraph;
use super::types::Node;
use crate::error::{Result, VizError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps column nodes of a model to the source columns they were taken from.
///
/// Keys are column node ids. When a column node is drawn as a link target, the
/// mapped source column's name is shown instead of the node's own label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    entries: HashMap<String, Node>,
}

impl ColumnMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: map `column_id` to `source_column`.
    pub fn with(mut self, column_id: impl Into<String>, source_column: Node) -> Self {
        self.insert(column_id, source_column);
        self
    }

    /// Map `column_id` to `source_column`, replacing any previous entry.
    pub fn insert(&mut self, column_id: impl Into<String>, source_column: Node) -> Option<Node> {
        self.entries.insert(column_id.into(), source_column)
    }

    /// Source column mapped to the given column node id.
    pub fn get(&self, column_id: &str) -> Option<&Node> {
        self.entries.get(column_id)
    }

    /// Display name for `node`, if it is mapped to a named source column.
    pub fn display_name_for(&self, node: &Node) -> Option<&str> {
        self.get(&node.id).and_then(Node::column_name)
    }

    /// Number of mapped columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A candidate semantic model: a graph plus its mapping to source columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticModel {
    /// Unique id of the model
    #[serde(default = "new_model_id")]
    pub id: String,
    /// Human readable name, used as the document label
    #[serde(default)]
    pub name: Option<String>,
    /// The model graph
    pub graph: SemanticGraph,
    /// Column node to source column mapping
    #[serde(default)]
    pub mapping_to_source_columns: ColumnMapping,
}

fn new_model_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl SemanticModel {
    /// Create an unnamed model with a fresh id.
    pub fn new(graph: SemanticGraph) -> Self {
        Self {
            id: new_model_id(),
            name: None,
            graph,
            mapping_to_source_columns: ColumnMapping::new(),
        }
    }

    /// Builder pattern: set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder pattern: set the column mapping.
    pub fn with_mapping(mut self, mapping: ColumnMapping) -> Self {
        self.mapping_to_source_columns = mapping;
        self
    }

    /// Load a model from JSON and check its links.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::Serialization`] for malformed JSON, or a graph error if
    /// a link is dangling or badly weighted.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: SemanticModel = serde_json::from_str(json)
            .map_err(|e| VizError::serialization("Failed to parse semantic model", Some(e)))?;
        model.graph.validate()?;
        Ok(model)
    }
}
