//! Unit tests for graph-to-document conversion.
//!
//! Tests cover:
//! - node deduplication and declaration order
//! - pattern link filtering
//! - node and link annotations
//! - column remapping
//! - single, model and multi-model documents

use alignviz::{
    ColumnMapping, Document, ExportOptions, GraphExporter, Link, Node, NodeKind, SemanticGraph,
    SemanticModel,
};
use indexmap::IndexMap;

fn labels(doc: &Document) -> Vec<&str> {
    doc.nodes().iter().map(|n| n.label.as_str()).collect()
}

fn column(id: &str, name: &str) -> Node {
    Node::new(id, NodeKind::Column {
        column_name: name.to_string(),
    })
}

// (A -> B), (B -> C), (A -> C)
fn triangle() -> SemanticGraph {
    let mut graph = SemanticGraph::new();
    let a = graph.add_node("http://ex.org/ns#A", NodeKind::Internal);
    let b = graph.add_node("http://ex.org/ns#B", NodeKind::Internal);
    let c = graph.add_node("http://ex.org/ns#C", NodeKind::Internal);
    graph.add_link(a, b, "l1", Some("http://ex.org/ns#ab"), 1.0).unwrap();
    graph.add_link(b, c, "l2", Some("http://ex.org/ns#bc"), 1.0).unwrap();
    graph.add_link(a, c, "l3", Some("http://ex.org/ns#ac"), 1.0).unwrap();
    graph
}

fn tagged_model(tag: &str) -> SemanticModel {
    let mut graph = SemanticGraph::new();
    let person = graph.insert_node(
        Node::new("http://ex.org/ns#Person1", NodeKind::Internal).with_model_ids([tag]),
    );
    let name = graph.insert_node(column("HN1", "name"));
    graph
        .insert_link(
            Link::new("l1", person, name, 0.125)
                .with_uri("http://ex.org/ns#name")
                .with_model_ids([tag]),
        )
        .unwrap();
    SemanticModel::new(graph)
}

#[test]
fn test_nodes_declared_once_in_first_encounter_order() {
    let graph = triangle();
    let doc = GraphExporter::new().convert(Some(&graph), None, &ExportOptions::default());

    assert_eq!(labels(&doc), vec!["A", "B", "C"]);
    assert_eq!(doc.edges().len(), 3);

    let ac = &doc.edges()[2];
    assert_eq!(ac.label, "ac");
    assert_eq!(doc.node(ac.source).unwrap().label, "A");
    assert_eq!(doc.node(ac.target).unwrap().label, "C");
}

#[test]
fn test_parallel_links_share_endpoints() {
    let mut graph = SemanticGraph::new();
    let a = graph.add_node("A", NodeKind::Internal);
    let b = graph.add_node("B", NodeKind::Internal);
    graph.add_link(a, b, "l1", Some("ex:p"), 1.0).unwrap();
    graph.add_link(a, b, "l2", Some("ex:q"), 2.0).unwrap();

    let doc = GraphExporter::new().convert(Some(&graph), None, &ExportOptions::default());
    assert_eq!(doc.nodes().len(), 2);
    assert_eq!(doc.edges().len(), 2);
    assert_eq!(doc.edges()[0].source, doc.edges()[1].source);
    assert_eq!(doc.edges()[0].target, doc.edges()[1].target);
}

#[test]
fn test_same_label_distinct_nodes_are_not_merged() {
    let mut graph = SemanticGraph::new();
    let a = graph.add_node("http://one.org/ns#Thing", NodeKind::Internal);
    let b = graph.add_node("http://two.org/ns#Thing", NodeKind::Internal);
    graph.add_link(a, b, "l1", None, 1.0).unwrap();

    let doc = GraphExporter::new().convert(Some(&graph), None, &ExportOptions::default());
    assert_eq!(labels(&doc), vec!["Thing", "Thing"]);
}

#[test]
fn test_isolated_nodes_are_not_declared() {
    let mut graph = SemanticGraph::new();
    graph.add_node("Lonely", NodeKind::Internal);

    let doc = GraphExporter::new().convert(Some(&graph), None, &ExportOptions::default());
    assert!(doc.nodes().is_empty());
}

#[test]
fn test_only_pattern_edges_filter() {
    let mut graph = SemanticGraph::new();
    let a = graph.add_node("A", NodeKind::Internal);
    let b = graph.add_node("B", NodeKind::Internal);
    let c = graph.add_node("C", NodeKind::Internal);
    graph.add_link(a, b, "plain", None, 1.0).unwrap();
    graph
        .insert_link(Link::new("tagged", b, c, 1.0).with_model_ids(["m1"]))
        .unwrap();

    let exporter = GraphExporter::new();

    let doc = exporter.convert(Some(&graph), None, &ExportOptions::patterns_only());
    assert_eq!(labels(&doc), vec!["B", "C"]);
    assert_eq!(doc.edges().len(), 1);
    assert_eq!(doc.edges()[0].label, "tagged");

    let doc = exporter.convert(Some(&graph), None, &ExportOptions::default());
    assert_eq!(labels(&doc), vec!["A", "B", "C"]);
    assert_eq!(doc.edges().len(), 2);
}

#[test]
fn test_node_styles_follow_kind() {
    let mut graph = SemanticGraph::new();
    let a = graph.add_node("A", NodeKind::Internal);
    let b = graph.insert_node(column("B", "b"));
    let c = graph.add_node("C", NodeKind::Literal {
        value: "42".to_string(),
    });
    graph.add_link(a, b, "l1", None, 1.0).unwrap();
    graph.add_link(a, c, "l2", None, 1.0).unwrap();

    let doc = GraphExporter::new().convert(Some(&graph), None, &ExportOptions::default());
    let nodes = doc.nodes();

    assert_eq!(nodes[0].style.get("style"), Some("filled"));
    assert_eq!(nodes[0].style.get("color"), Some("white"));
    assert_eq!(nodes[0].style.get("fillcolor"), Some("lightgray"));

    assert_eq!(nodes[1].style.get("shape"), Some("plaintext"));
    assert_eq!(nodes[1].style.get("fillcolor"), Some("gold"));

    assert_eq!(nodes[2].style.get("shape"), Some("plaintext"));
    assert_eq!(nodes[2].style.get("fillcolor"), Some("#CC7799"));

    for edge in doc.edges() {
        assert_eq!(edge.style.get("color"), Some("brown"));
        assert_eq!(edge.style.get("fontcolor"), Some("black"));
    }
}

#[test]
fn test_node_metadata_appended() {
    let mut graph = SemanticGraph::new();
    let a = graph
        .insert_node(Node::new("http://ex.org/ns#A", NodeKind::Internal).with_model_ids(["m1"]));
    let b = graph.add_node("http://ex.org/ns#B", NodeKind::Internal);
    graph.add_link(a, b, "l1", None, 1.0).unwrap();

    let options = ExportOptions::default().show_node_metadata(true);
    let doc = GraphExporter::new().convert(Some(&graph), None, &options);

    assert_eq!(labels(&doc), vec!["A\n[m1]", "B\n"]);
    assert_eq!(doc.edges()[0].label, "l1");
}

#[test]
fn test_link_metadata_appended() {
    let model = tagged_model("m7");
    let options = ExportOptions::default().show_link_metadata(true);
    let doc = GraphExporter::new().convert(Some(&model.graph), None, &options);

    assert_eq!(doc.edges()[0].label, "name\nw=0.13\n[m7]");
    assert_eq!(labels(&doc), vec!["Person1", "HN1"]);
}

#[test]
fn test_whole_weight_has_no_trailing_zero() {
    let mut graph = SemanticGraph::new();
    let a = graph.add_node("A", NodeKind::Internal);
    let b = graph.add_node("B", NodeKind::Internal);
    graph.add_link(a, b, "l1", Some("ex#p"), 1.0).unwrap();

    let doc = GraphExporter::new().convert(Some(&graph), None, &ExportOptions::with_metadata());
    assert_eq!(doc.edges()[0].label, "p\nw=1\n");
}

#[test]
fn test_target_column_uses_mapped_name() {
    let mut graph = SemanticGraph::new();
    let person = graph.add_node("http://ex.org/ns#Person1", NodeKind::Internal);
    let name = graph.insert_node(column("http://ex.org/cols#HN1", "fullname"));
    let age = graph.insert_node(column("http://ex.org/cols#HN2", "age"));
    graph.add_link(person, name, "l1", Some("ex#name"), 1.0).unwrap();
    graph.add_link(person, age, "l2", Some("ex#age"), 1.0).unwrap();

    let mapping = ColumnMapping::new().with("http://ex.org/cols#HN1", column("src1", "Full Name"));
    let doc = GraphExporter::new().convert(Some(&graph), Some(&mapping), &ExportOptions::default());

    // HN2 has no entry and keeps its derived label
    assert_eq!(labels(&doc), vec!["Person1", "Full Name", "HN2"]);
}

#[test]
fn test_mapped_name_gets_metadata_too() {
    let mut graph = SemanticGraph::new();
    let person = graph.add_node("P", NodeKind::Internal);
    let name = graph.insert_node(column("HN1", "fullname").with_model_ids(["m1"]));
    graph.add_link(person, name, "l1", None, 1.0).unwrap();

    let mapping = ColumnMapping::new().with("HN1", column("src1", "Name"));
    let options = ExportOptions::default().show_node_metadata(true);
    let doc = GraphExporter::new().convert(Some(&graph), Some(&mapping), &options);

    assert_eq!(doc.nodes()[1].label, "Name\n[m1]");
}

#[test]
fn test_empty_and_missing_graph() {
    let exporter = GraphExporter::new();
    let options = ExportOptions::with_metadata();

    let doc = exporter.convert(None, None, &options);
    assert!(doc.nodes().is_empty() && doc.edges().is_empty());

    let doc = exporter.convert(Some(&SemanticGraph::new()), None, &options);
    assert!(doc.nodes().is_empty() && doc.edges().is_empty());
}

#[test]
fn test_export_single() {
    let graph = triangle();
    let doc = GraphExporter::new().export_single(
        Some(&graph),
        Some("triangle"),
        &ExportOptions::default(),
    );

    assert_eq!(doc.label(), Some("triangle"));
    assert_eq!(doc.attributes().get("fontcolor"), Some("blue"));
    assert_eq!(doc.attributes().get("remincross"), Some("true"));
    assert!(doc.subgraphs().is_empty());
    assert_eq!(doc.nodes().len(), 3);

    let doc = GraphExporter::new().export_single(None, None, &ExportOptions::default());
    assert_eq!(doc.label(), Some(""));
    assert!(doc.nodes().is_empty());
}

#[test]
fn test_export_model() {
    let mut model = tagged_model("m1").with_name("Candidate");
    model.mapping_to_source_columns = ColumnMapping::new().with("HN1", column("src", "Name"));

    let doc = GraphExporter::new().export_model(&model, true, false);

    assert_eq!(doc.label(), Some("Candidate"));
    assert_eq!(doc.attributes().get("fontcolor"), Some("blue"));
    assert!(doc.nodes().is_empty());
    assert_eq!(doc.subgraphs().len(), 1);

    let cluster = &doc.subgraphs()[0];
    assert_eq!(cluster.id(), Some("cluster"));
    assert_eq!(cluster.label(), Some("model"));
    assert_eq!(labels(cluster), vec!["Person1\n[m1]", "Name\n"]);
    assert_eq!(cluster.edges()[0].label, "name");
}

#[test]
fn test_export_unnamed_model() {
    let doc = GraphExporter::new().export_model(&tagged_model("m1"), false, false);
    assert_eq!(doc.label(), Some(""));
}

#[test]
fn test_export_model_collection() {
    let mut models = IndexMap::new();
    models.insert("1-correct model".to_string(), tagged_model("m1"));
    models.insert("alt".to_string(), tagged_model("m2"));

    let doc = GraphExporter::new().export_model_collection(Some(&models), Some("models"));

    assert_eq!(doc.label(), Some("models"));
    assert_eq!(doc.attributes().get("remincross"), Some("true"));
    assert_eq!(doc.subgraphs().len(), 2);

    let correct = &doc.subgraphs()[0];
    assert_eq!(correct.id(), Some("cluster_0"));
    assert_eq!(correct.label(), Some("1-correct model"));
    assert_eq!(labels(correct), vec!["Person1", "HN1"]);
    assert_eq!(correct.edges()[0].label, "name");

    let alt = &doc.subgraphs()[1];
    assert_eq!(alt.id(), Some("cluster_1"));
    assert_eq!(alt.label(), Some("alt"));
    assert_eq!(labels(alt), vec!["Person1\n[m2]", "HN1\n"]);
    assert_eq!(alt.edges()[0].label, "name\nw=0.13\n[m2]");
}

#[test]
fn test_export_model_collection_preserves_order() {
    let mut models = IndexMap::new();
    for name in ["zeta", "alpha", "mid"] {
        models.insert(name.to_string(), tagged_model(name));
    }

    let doc = GraphExporter::new().export_model_collection(Some(&models), None);
    let names: Vec<_> = doc.subgraphs().iter().filter_map(Document::label).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert_eq!(doc.label(), Some(""));
}

#[test]
fn test_export_empty_model_collection() {
    let exporter = GraphExporter::new();

    let doc = exporter.export_model_collection(None, None);
    assert!(doc.subgraphs().is_empty());

    let doc = exporter.export_model_collection(Some(&IndexMap::new()), Some("none"));
    assert!(doc.subgraphs().is_empty());
    assert_eq!(doc.label(), Some("none"));
}

#[test]
fn test_exporter_is_shareable_across_threads() {
    let exporter = std::sync::Arc::new(GraphExporter::new());
    let graph = std::sync::Arc::new(triangle());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let exporter = exporter.clone();
            let graph = graph.clone();
            std::thread::spawn(move || {
                exporter
                    .convert(Some(&graph), None, &ExportOptions::default())
                    .nodes()
                    .len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
