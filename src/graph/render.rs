//! Rendering the reference graph: CSV edge list and Mermaid diagram.

use std::fmt::Write as _;
use std::io;

use crate::models::{Category, ReferenceEdge};

use super::ReferenceGraph;

/// CSV header columns.
pub const CSV_HEADER: [&str; 2] = ["start_point", "end_point"];

/// Write the flat edge list as CSV; the header is always written.
pub fn write_csv<W: io::Write>(writer: W, edges: &[ReferenceEdge]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for edge in edges {
        csv_writer.write_record([edge.source.as_str(), edge.target.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the flat edge list as a CSV string.
pub fn render_csv(edges: &[ReferenceEdge]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(&mut buf, edges)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Read an edge list previously written by [`write_csv`].
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<ReferenceEdge>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

/// Diagram node identifier: `.`, `-` and spaces become `_`.
///
/// Distinct filenames may collide after sanitizing; collisions are not resolved.
pub fn sanitize_node_id(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '.' | '-' | ' ' => '_',
            other => other,
        })
        .collect()
}

fn escape_label(filename: &str) -> String {
    filename.replace('"', "#quot;")
}

/// Render the consolidated graph as a Mermaid flowchart document.
pub fn render_mermaid(graph: &ReferenceGraph, direction: &str) -> String {
    let mut out = String::new();
    out.push_str("# Reference Graph\n\n");
    out.push_str("```mermaid\n");
    let _ = writeln!(out, "flowchart {}", direction);

    for category in Category::all() {
        let _ = writeln!(
            out,
            "    classDef {} {}",
            category.class_name(),
            category.style()
        );
    }

    for (name, category) in graph.nodes() {
        let id = sanitize_node_id(name);
        let label = escape_label(name);
        match category {
            Some(category) => {
                let _ = writeln!(out, "    {}[\"{}\"]:::{}", id, label, category.class_name());
            }
            None => {
                let _ = writeln!(out, "    {}[\"{}\"]", id, label);
            }
        }
    }

    for edge in graph.consolidated() {
        let _ = writeln!(
            out,
            "    {} {} {}",
            sanitize_node_id(&edge.source),
            edge.kind.connector(),
            sanitize_node_id(&edge.target)
        );
    }

    out.push_str("```\n");
    out
}
