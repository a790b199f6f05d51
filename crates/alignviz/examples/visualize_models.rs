//! Export a set of candidate semantic models to Graphviz.
//!
//! Builds the reference model and an alternative candidate for a small
//! person/organization source, then writes:
//! - output/correct.dot with the reference model alone
//! - output/models.dot with both models as side-by-side clusters
//! - output/models.json with the same document as JSON

use alignviz::export::{self, write_dot_file};
use alignviz::{ColumnMapping, GraphExporter, Link, Node, NodeKind, SemanticGraph, SemanticModel};
use indexmap::IndexMap;
use std::fs;

const NS: &str = "http://example.org/ontology#";

fn column(id: &str, name: &str) -> Node {
    Node::new(id, NodeKind::Column {
        column_name: name.to_string(),
    })
}

fn candidate(tag: &str, works_for_weight: f64) -> alignviz::Result<SemanticModel> {
    let mut graph = SemanticGraph::new();
    let person = graph
        .insert_node(Node::new(format!("{NS}Person1"), NodeKind::Internal).with_model_ids([tag]));
    let org = graph.insert_node(
        Node::new(format!("{NS}Organization1"), NodeKind::Internal).with_model_ids([tag]),
    );
    let name = graph.insert_node(column("HN1", "c1"));
    let company = graph.insert_node(column("HN2", "c2"));
    let country = graph.add_node("lit-1", NodeKind::Literal {
        value: "US".to_string(),
    });

    graph.insert_link(
        Link::new("l1", person, name, 1.0)
            .with_uri(format!("{NS}name"))
            .with_model_ids([tag]),
    )?;
    graph.insert_link(
        Link::new("l2", person, org, works_for_weight)
            .with_uri(format!("{NS}worksFor"))
            .with_model_ids([tag]),
    )?;
    graph.insert_link(
        Link::new("l3", org, company, 1.0)
            .with_uri(format!("{NS}name"))
            .with_model_ids([tag]),
    )?;
    graph.add_link(org, country, "l4", Some(format!("{NS}country").as_str()), 0.5)?;

    let mapping = ColumnMapping::new()
        .with("HN1", column("src-1", "Employee"))
        .with("HN2", column("src-2", "Employer"));

    Ok(SemanticModel::new(graph).with_mapping(mapping))
}

fn main() -> alignviz::Result<()> {
    let exporter = GraphExporter::new();
    fs::create_dir_all("output").map_err(|e| alignviz::VizError::io("output", e))?;

    let correct = candidate("gold", 1.0)?.with_name("reference");
    write_dot_file(&exporter.export_model(&correct, true, true), "output/correct.dot")?;
    println!("✓ Saved output/correct.dot");

    let mut models = IndexMap::new();
    models.insert("1-correct model".to_string(), correct);
    models.insert("2-candidate".to_string(), candidate("m2", 2.345)?);

    let document = exporter.export_model_collection(Some(&models), Some("ranked candidates"));
    write_dot_file(&document, "output/models.dot")?;
    println!("✓ Saved output/models.dot");

    fs::write("output/models.json", export::to_json(&document)?)
        .map_err(|e| alignviz::VizError::io("output/models.json", e))?;
    println!("✓ Saved output/models.json");
    println!("→ Render with: dot -Tpng output/models.dot -o output/models.png");

    Ok(())
}
