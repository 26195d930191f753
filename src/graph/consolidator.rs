//! Edge consolidation for the diagram.

use std::collections::HashSet;

use crate::models::{ConsolidatedEdge, EdgeKind, ReferenceEdge};

/// Merge opposite-direction edges into a single bidirectional edge.
///
/// Edges are visited in order; the first edge of each unordered pair decides
/// the emitted orientation. Once a pair has been emitted it is never emitted
/// again, whichever direction recurs later.
pub fn consolidate(edges: &[ReferenceEdge]) -> Vec<ConsolidatedEdge> {
    let present: HashSet<(&str, &str)> = edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    let mut emitted: HashSet<(&str, &str)> = HashSet::new();
    let mut consolidated = Vec::new();

    for edge in edges {
        if edge.source == edge.target || !emitted.insert(edge.pair_key()) {
            continue;
        }

        let kind = if present.contains(&(edge.target.as_str(), edge.source.as_str())) {
            EdgeKind::Bidirectional
        } else {
            EdgeKind::Directional
        };

        consolidated.push(ConsolidatedEdge {
            source: edge.source.clone(),
            target: edge.target.clone(),
            kind,
        });
    }

    consolidated
}
