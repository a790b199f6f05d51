//! Unit tests for writing DOT documents to files.

use alignviz::export::{
    export_graph_to_file, export_model_collection_to_file, export_model_to_file, write_dot_file,
};
use alignviz::{Document, ExportOptions, NodeKind, SemanticGraph, SemanticModel, VizError};
use indexmap::IndexMap;
use std::fs;
use tempfile::TempDir;

fn pair_graph() -> SemanticGraph {
    let mut graph = SemanticGraph::new();
    let a = graph.add_node("http://ex.org/ns#A", NodeKind::Internal);
    let b = graph.add_node("http://ex.org/ns#B", NodeKind::Internal);
    graph.add_link(a, b, "l1", Some("http://ex.org/ns#p"), 1.0).unwrap();
    graph
}

#[test]
fn test_export_graph_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.dot");

    export_graph_to_file(Some(&pair_graph()), Some("pair"), &ExportOptions::default(), &path)
        .unwrap();

    let dot = fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("label=\"pair\";"));
    assert!(dot.contains("n0 -> n1"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn test_export_model_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.dot");
    let model = SemanticModel::new(pair_graph()).with_name("m");

    export_model_to_file(&model, true, true, &path).unwrap();

    let dot = fs::read_to_string(&path).unwrap();
    assert!(dot.contains("subgraph cluster {"));
    assert!(dot.contains("label=\"p\\nw=1\\n\""));
}

#[test]
fn test_export_model_collection_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("models.dot");

    let mut models = IndexMap::new();
    models.insert("first".to_string(), SemanticModel::new(pair_graph()));
    models.insert("second".to_string(), SemanticModel::new(pair_graph()));

    export_model_collection_to_file(Some(&models), Some("all"), &path).unwrap();

    let dot = fs::read_to_string(&path).unwrap();
    assert!(dot.contains("subgraph cluster_0 {"));
    assert!(dot.contains("subgraph cluster_1 {"));
}

#[test]
fn test_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.dot");
    fs::write(&path, "stale contents that are longer than the new document").unwrap();

    write_dot_file(&Document::new(), &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "digraph {\n}\n");
}

#[test]
fn test_missing_directory_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("graph.dot");

    let err = write_dot_file(&Document::new(), &path).unwrap_err();
    match err {
        VizError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected I/O error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_failed_export_leaves_no_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    // A directory cannot be replaced by a file
    let path = temp_dir.path().join("taken");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep.txt"), "x").unwrap();

    assert!(write_dot_file(&Document::new(), &path).is_err());

    let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(path.is_dir());
}
