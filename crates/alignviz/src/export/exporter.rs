//! Conversion of semantic graphs into [`Document`]s.

use super::config::{ExportOptions, StyleSheet};
use super::document::{Document, EdgeDecl, NodeDecl, NodeHandle, Style};
use super::label::{
    display_label, extract_local_name, format_model_ids, format_weight, label_or_fallback,
};
use crate::model::{ColumnMapping, Link, Node, NodeIndex, NodeKind, SemanticGraph, SemanticModel};
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

/// Separator between a label and its annotations.
const METADATA_SEPARATOR: &str = "\n";

/// Name under which the reference model is drawn without annotations.
pub const CORRECT_MODEL_NAME: &str = "1-correct model";

/// Builds [`Document`]s from semantic graphs.
///
/// The exporter holds only its style sheet, so one instance can be shared
/// across threads and calls.
#[derive(Debug, Clone, Default)]
pub struct GraphExporter {
    styles: StyleSheet,
}

/// Which endpoint of a link is being registered.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Source,
    Target,
}

impl GraphExporter {
    /// Create an exporter with the default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with custom styles.
    pub fn with_styles(styles: StyleSheet) -> Self {
        Self { styles }
    }

    /// The style sheet in use.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Convert a graph into a flat document of node and edge declarations.
    ///
    /// Links are scanned in graph order. Each endpoint is declared once, the first
    /// time a drawn link touches it. A missing graph gives an empty document.
    pub fn convert(
        &self,
        graph: Option<&SemanticGraph>,
        column_mapping: Option<&ColumnMapping>,
        options: &ExportOptions,
    ) -> Document {
        let Some(graph) = graph else {
            return Document::new();
        };

        let mut state = ConvertState {
            styles: &self.styles,
            column_mapping,
            options,
            document: Document::new(),
            declared: IndexSet::new(),
            handles: Vec::new(),
        };
        let mut skipped = 0usize;

        for (link, source, target) in graph.links_with_endpoints() {
            if options.only_pattern_edges && !link.is_pattern() {
                skipped += 1;
                continue;
            }

            let source_handle = state.register(link.source, source, Endpoint::Source);
            let target_handle = state.register(link.target, target, Endpoint::Target);

            state.document.declare_edge(EdgeDecl {
                source: source_handle,
                target: target_handle,
                label: link_label(link, options),
                style: self.styles.link.clone(),
            });
        }

        debug!(
            "Converted graph: {} links scanned, {} skipped, {} nodes declared",
            graph.link_count(),
            skipped,
            state.declared.len()
        );
        state.document
    }

    /// Convert a single graph into a labeled root document.
    pub fn export_single(
        &self,
        graph: Option<&SemanticGraph>,
        label: Option<&str>,
        options: &ExportOptions,
    ) -> Document {
        with_root_hints(self.convert(graph, None, options)).with_attr("label", label.unwrap_or(""))
    }

    /// Draw one model as a cluster labeled `model` inside a document named after it.
    ///
    /// The model's own column mapping is applied; all links are drawn.
    pub fn export_model(
        &self,
        model: &SemanticModel,
        show_node_metadata: bool,
        show_link_metadata: bool,
    ) -> Document {
        let options = ExportOptions::default()
            .show_node_metadata(show_node_metadata)
            .show_link_metadata(show_link_metadata);
        let cluster = self
            .convert(
                Some(&model.graph),
                Some(&model.mapping_to_source_columns),
                &options,
            )
            .with_attr("label", "model")
            .with_id("cluster");

        with_root_hints(Document::new())
            .with_attr("label", model.name.as_deref().unwrap_or(""))
            .with_subgraph(cluster)
    }

    /// Draw several models side by side, one cluster per entry, in map order.
    ///
    /// Clusters are named `cluster_0`, `cluster_1`, ... and labeled with the map
    /// key. The entry named [`CORRECT_MODEL_NAME`] is drawn without annotations.
    pub fn export_model_collection(
        &self,
        models: Option<&IndexMap<String, SemanticModel>>,
        label: Option<&str>,
    ) -> Document {
        let mut root = with_root_hints(Document::new()).with_attr("label", label.unwrap_or(""));

        for (counter, (name, model)) in models.into_iter().flatten().enumerate() {
            let show_metadata = name != CORRECT_MODEL_NAME;
            let options = ExportOptions::default()
                .show_node_metadata(show_metadata)
                .show_link_metadata(show_metadata);
            let cluster = self
                .convert(
                    Some(&model.graph),
                    Some(&model.mapping_to_source_columns),
                    &options,
                )
                .with_id(format!("cluster_{counter}"))
                .with_attr("label", name.as_str());
            root = root.with_subgraph(cluster);
        }

        root
    }
}

/// Per-call bookkeeping while a graph is converted.
struct ConvertState<'a> {
    styles: &'a StyleSheet,
    column_mapping: Option<&'a ColumnMapping>,
    options: &'a ExportOptions,
    document: Document,
    declared: IndexSet<NodeIndex>,
    handles: Vec<NodeHandle>,
}

impl ConvertState<'_> {
    /// Declare `node` on first sight and return its handle.
    fn register(&mut self, index: NodeIndex, node: &Node, endpoint: Endpoint) -> NodeHandle {
        let (position, inserted) = self.declared.insert_full(index);
        if !inserted {
            return self.handles[position];
        }

        let mut label = match (endpoint, self.column_mapping) {
            (Endpoint::Target, Some(mapping)) if node.is_column() => mapping
                .display_name_for(node)
                .map(str::to_string)
                .unwrap_or_else(|| display_label(&node.id)),
            _ => display_label(&node.id),
        };
        if self.options.show_node_metadata {
            label.push_str(METADATA_SEPARATOR);
            label.push_str(&format_model_ids(&node.model_ids));
        }

        trace!("Declaring node {} as {:?}", node.id, label);
        let handle = self.document.declare_node(NodeDecl {
            label,
            style: node_style(self.styles, &node.kind).clone(),
        });
        self.handles.push(handle);
        handle
    }
}

fn node_style<'s>(styles: &'s StyleSheet, kind: &NodeKind) -> &'s Style {
    match kind {
        NodeKind::Column { .. } => &styles.column,
        NodeKind::Literal { .. } => &styles.literal,
        NodeKind::Internal => &styles.internal,
    }
}

fn with_root_hints(document: Document) -> Document {
    document
        .with_attr("fontcolor", "blue")
        .with_attr("remincross", "true")
}

fn link_label(link: &Link, options: &ExportOptions) -> String {
    let mut label = label_or_fallback(extract_local_name(link.uri.as_deref()), &link.id);
    if options.show_link_metadata {
        label.push_str(METADATA_SEPARATOR);
        label.push_str(&format_weight(link.weight));
        label.push_str(METADATA_SEPARATOR);
        label.push_str(&format_model_ids(&link.model_ids));
    }
    label
}
