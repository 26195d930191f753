//! Mention scanning: which documents contain which candidate filenames.

use std::collections::{HashMap, HashSet};

use crate::models::{Category, ReferenceEdge};

use super::collector::CandidateSet;
use super::corpus::Corpus;

/// Raw scan result.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    /// Edges in encounter order, each `(source, target)` pair at most once.
    pub edges: Vec<ReferenceEdge>,
    /// Filename to category, candidates merged with physical locations.
    pub categories: HashMap<String, Category>,
    /// Documents read and searched.
    pub scanned: usize,
    /// Documents skipped because they could not be read.
    pub skipped: usize,
}

/// Search every document (except the summary index) for every candidate name.
///
/// Matching is plain case-sensitive substring containment, so a mention of
/// `dl_1_Auth.md` also counts as a mention of `Auth.md`. A document never
/// references itself, and unreadable documents contribute no edges.
pub fn scan_mentions(
    corpus: &dyn Corpus,
    candidates: &CandidateSet,
    summary_file: &str,
) -> ScanOutput {
    let mut output = ScanOutput {
        categories: candidates.categories().clone(),
        ..Default::default()
    };
    let mut emitted: HashSet<ReferenceEdge> = HashSet::new();

    for &category in Category::all() {
        for entry in corpus.documents(category) {
            output.categories.insert(entry.name.clone(), entry.category);

            if entry.name == summary_file {
                continue;
            }

            let content = match corpus.read(&entry) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!(
                        file = %entry.path.display(),
                        error = %e,
                        "Skipping unreadable document"
                    );
                    output.skipped += 1;
                    continue;
                }
            };
            output.scanned += 1;

            for target in candidates.names() {
                if *target == entry.name || !content.contains(target.as_str()) {
                    continue;
                }
                let edge = ReferenceEdge::new(entry.name.as_str(), target.as_str());
                if emitted.insert(edge.clone()) {
                    output.edges.push(edge);
                }
            }
        }
    }

    tracing::debug!(
        scanned = output.scanned,
        skipped = output.skipped,
        edges = output.edges.len(),
        "Mention scan complete"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::collector::collect_candidates;
    use crate::graph::corpus::memory::MemoryCorpus;

    fn scan(corpus: &MemoryCorpus) -> ScanOutput {
        let candidates = collect_candidates(corpus);
        scan_mentions(corpus, &candidates, "_summary.md")
    }

    fn edge_set(output: &ScanOutput) -> HashSet<(String, String)> {
        output
            .edges
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect()
    }

    #[test]
    fn test_mutual_mentions_produce_two_edges() {
        let corpus = MemoryCorpus::new()
            .with(Category::DesignLogs, "dl_1_Auth.md", "see dl_2_DB.md")
            .with(Category::DesignLogs, "dl_2_DB.md", "used by dl_1_Auth.md");
        let output = scan(&corpus);

        let expected: HashSet<(String, String)> = [
            ("dl_1_Auth.md".to_string(), "dl_2_DB.md".to_string()),
            ("dl_2_DB.md".to_string(), "dl_1_Auth.md".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(edge_set(&output), expected);
    }

    #[test]
    fn test_self_mention_ignored() {
        let corpus = MemoryCorpus::new().with(
            Category::Operations,
            "op_1_Deploy.md",
            "# op_1_Deploy.md\nThis is op_1_Deploy.md",
        );
        let output = scan(&corpus);
        assert!(output.edges.is_empty());
        assert_eq!(output.scanned, 1);
    }

    #[test]
    fn test_repeated_mentions_collapse() {
        let corpus = MemoryCorpus::new()
            .with(Category::DesignLogs, "a.md", "b.md b.md b.md")
            .with(Category::DesignLogs, "b.md", "");
        let output = scan(&corpus);
        assert_eq!(output.edges, vec![ReferenceEdge::new("a.md", "b.md")]);
    }

    #[test]
    fn test_summary_is_target_but_not_source() {
        let corpus = MemoryCorpus::new()
            .with(
                Category::DesignLogs,
                "_summary.md",
                "- `dl_1_a.md`: a\n- `dl_2_b.md`: b",
            )
            .with(Category::DesignLogs, "dl_1_a.md", "indexed in _summary.md")
            .with(Category::DesignLogs, "dl_2_b.md", "");
        let output = scan(&corpus);

        assert!(output.edges.iter().all(|e| e.source != "_summary.md"));
        assert_eq!(output.edges, vec![ReferenceEdge::new("dl_1_a.md", "_summary.md")]);
    }

    #[test]
    fn test_substring_false_positive_kept() {
        let corpus = MemoryCorpus::new()
            .with(Category::DesignLogs, "dl_1_Auth.md", "")
            .with(Category::Artifacts, "Auth.md", "")
            .with(Category::Operations, "op_1.md", "follow dl_1_Auth.md");
        let output = scan(&corpus);

        let edges = edge_set(&output);
        assert!(edges.contains(&("op_1.md".to_string(), "dl_1_Auth.md".to_string())));
        assert!(edges.contains(&("op_1.md".to_string(), "Auth.md".to_string())));
        assert!(!edges.contains(&("dl_1_Auth.md".to_string(), "Auth.md".to_string())));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let corpus = MemoryCorpus::new()
            .with(Category::DesignLogs, "dl_1_Auth.md", "")
            .with(Category::Operations, "op_1.md", "see DL_1_AUTH.MD");
        let output = scan(&corpus);
        assert!(output.edges.is_empty());
    }

    #[test]
    fn test_unreadable_document_skipped() {
        let corpus = MemoryCorpus::new()
            .with_unreadable(Category::DesignLogs, "broken.md")
            .with(Category::Operations, "op_1.md", "see broken.md");
        let output = scan(&corpus);

        assert_eq!(output.skipped, 1);
        assert_eq!(output.scanned, 1);
        assert_eq!(output.edges, vec![ReferenceEdge::new("op_1.md", "broken.md")]);
    }

    #[test]
    fn test_categories_follow_physical_location() {
        let corpus = MemoryCorpus::new()
            .with(Category::DesignLogs, "dl_1.md", "art_1_diagram.png")
            .with(Category::Artifacts, "art_1_diagram.png", "");
        let output = scan(&corpus);

        assert_eq!(output.categories.get("dl_1.md"), Some(&Category::DesignLogs));
        assert_eq!(
            output.categories.get("art_1_diagram.png"),
            Some(&Category::Artifacts)
        );
    }
}
