//! Reference graph builder.
//!
//! Detects which workspace documents mention which other documents by
//! filename and renders the result. The pipeline runs in four stages, each a
//! pure function over the previous stage's output:
//!
//! 1. `collector`: candidate filenames across the category directories
//! 2. `scanner`: substring search of every document for every candidate
//! 3. `consolidator`: merge opposite-direction edges for the diagram
//! 4. `render`: CSV edge list and Mermaid diagram
//!
//! Nothing is cached between runs; every build rescans the corpus.

mod collector;
mod consolidator;
mod corpus;
pub mod render;
mod scanner;

use std::collections::{HashMap, HashSet};

pub use collector::{collect_candidates, CandidateSet};
pub use consolidator::consolidate;
pub use corpus::{Corpus, DocumentEntry, FsCorpus};
pub use scanner::{scan_mentions, ScanOutput};

#[cfg(test)]
pub(crate) use corpus::memory::MemoryCorpus;

use crate::models::{Category, ConsolidatedEdge, ReferenceEdge};

/// The reference graph of one build.
#[derive(Debug, Clone, Default)]
pub struct ReferenceGraph {
    edges: Vec<ReferenceEdge>,
    consolidated: Vec<ConsolidatedEdge>,
    categories: HashMap<String, Category>,
    scanned: usize,
    skipped: usize,
}

impl ReferenceGraph {
    /// Run collect → scan → consolidate over a corpus.
    pub fn build(corpus: &dyn Corpus, summary_file: &str) -> Self {
        let candidates = collect_candidates(corpus);
        let scan = scan_mentions(corpus, &candidates, summary_file);
        let consolidated = consolidate(&scan.edges);

        let participating: HashSet<&str> = scan
            .edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .collect();
        let categories = scan
            .categories
            .iter()
            .filter(|(name, _)| participating.contains(name.as_str()))
            .map(|(name, category)| (name.clone(), *category))
            .collect();

        Self {
            edges: scan.edges,
            consolidated,
            categories,
            scanned: scan.scanned,
            skipped: scan.skipped,
        }
    }

    /// Flat edge list, as exported to CSV.
    pub fn edges(&self) -> &[ReferenceEdge] {
        &self.edges
    }

    /// Consolidated edges, as drawn in the diagram.
    pub fn consolidated(&self) -> &[ConsolidatedEdge] {
        &self.consolidated
    }

    /// Category of a node that appears in at least one edge.
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.categories.get(name).copied()
    }

    /// Nodes in first-appearance order over the flat edge list.
    pub fn nodes(&self) -> Vec<(&str, Option<Category>)> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for edge in &self.edges {
            for name in [edge.source.as_str(), edge.target.as_str()] {
                if seen.insert(name) {
                    nodes.push((name, self.category_of(name)));
                }
            }
        }
        nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct documents with at least one outgoing reference.
    pub fn source_count(&self) -> usize {
        self.edges
            .iter()
            .map(|e| e.source.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn node_count(&self) -> usize {
        self.categories.len()
    }

    pub fn bidirectional_count(&self) -> usize {
        self.consolidated
            .iter()
            .filter(|e| e.is_bidirectional())
            .count()
    }

    /// Documents read during the scan.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Documents skipped because they could not be read.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Targets referenced by `name`.
    pub fn references_from(&self, name: &str) -> Vec<String> {
        references_from(&self.edges, name)
    }

    /// Sources referencing `name`.
    pub fn references_to(&self, name: &str) -> Vec<String> {
        references_to(&self.edges, name)
    }
}

/// Targets of every edge starting at `name`.
pub fn references_from(edges: &[ReferenceEdge], name: &str) -> Vec<String> {
    edges
        .iter()
        .filter(|e| e.source == name)
        .map(|e| e.target.clone())
        .collect()
}

/// Sources of every edge ending at `name`.
pub fn references_to(edges: &[ReferenceEdge], name: &str) -> Vec<String> {
    edges
        .iter()
        .filter(|e| e.target == name)
        .map(|e| e.source.clone())
        .collect()
}
