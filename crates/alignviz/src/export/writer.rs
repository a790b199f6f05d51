//! Writing documents to streams and files.
//!
//! Documents are always serialized completely in memory first. File output goes
//! through a temporary file in the destination directory that is renamed over
//! the target, so a failed export never leaves a truncated DOT file behind.

use super::config::ExportOptions;
use super::document::Document;
use super::dot::to_dot;
use super::exporter::GraphExporter;
use crate::error::{Result, VizError};
use crate::model::{SemanticGraph, SemanticModel};
use indexmap::IndexMap;
use log::{debug, info};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a document as DOT to any writer.
///
/// # Errors
///
/// Returns [`VizError::Stream`] if the writer fails.
pub fn write_dot<W: Write>(document: &Document, mut writer: W) -> Result<()> {
    let dot = to_dot(document);
    writer.write_all(dot.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a document as DOT to `path`, replacing the file atomically.
///
/// # Errors
///
/// Returns [`VizError::Io`] if the temporary file cannot be created, written or
/// moved into place. The destination is left untouched in that case.
pub fn write_dot_file(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let dot = to_dot(document);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| VizError::io(path, e))?;
    file.write_all(dot.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| VizError::io(path, e))?;
    file.persist(path).map_err(|e| VizError::io(path, e.error))?;

    debug!("Wrote {} bytes to {}", dot.len(), path.display());
    Ok(())
}

/// Export a single graph to a DOT file.
///
/// # Errors
///
/// See [`write_dot_file`].
pub fn export_graph_to_file(
    graph: Option<&SemanticGraph>,
    label: Option<&str>,
    options: &ExportOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    info!("exporting the graph to graphviz ...");
    let document = GraphExporter::new().export_single(graph, label, options);
    write_dot_file(&document, path)?;
    info!("export is done.");
    Ok(())
}

/// Export one semantic model to a DOT file.
///
/// # Errors
///
/// See [`write_dot_file`].
pub fn export_model_to_file(
    model: &SemanticModel,
    show_node_metadata: bool,
    show_link_metadata: bool,
    path: impl AsRef<Path>,
) -> Result<()> {
    info!(
        "exporting model {} to graphviz ...",
        model.name.as_deref().unwrap_or(&model.id)
    );
    let document = GraphExporter::new().export_model(model, show_node_metadata, show_link_metadata);
    write_dot_file(&document, path)?;
    info!("export is done.");
    Ok(())
}

/// Export several semantic models, one cluster each, to a DOT file.
///
/// # Errors
///
/// See [`write_dot_file`].
pub fn export_model_collection_to_file(
    models: Option<&IndexMap<String, SemanticModel>>,
    label: Option<&str>,
    path: impl AsRef<Path>,
) -> Result<()> {
    info!(
        "exporting {} models to graphviz ...",
        models.map_or(0, IndexMap::len)
    );
    let document = GraphExporter::new().export_model_collection(models, label);
    write_dot_file(&document, path)?;
    info!("export is done.");
    Ok(())
}
