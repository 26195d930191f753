//! Candidate collection: every document filename across all categories.

use std::collections::{HashMap, HashSet};

use crate::models::Category;

use super::corpus::Corpus;

/// The filenames other documents may mention, with their category.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    names: Vec<String>,
    categories: HashMap<String, Category>,
}

impl CandidateSet {
    /// Candidate filenames in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn categories(&self) -> &HashMap<String, Category> {
        &self.categories
    }
}

/// List every filename in every category.
///
/// A name present in several categories is kept once; its category is the
/// last one visited in [`Category::all`] order.
pub fn collect_candidates(corpus: &dyn Corpus) -> CandidateSet {
    let mut seen = HashSet::new();
    let mut set = CandidateSet::default();

    for &category in Category::all() {
        for entry in corpus.documents(category) {
            set.categories.insert(entry.name.clone(), category);
            if seen.insert(entry.name.clone()) {
                set.names.push(entry.name);
            }
        }
    }

    tracing::debug!(candidates = set.len(), "Collected candidate filenames");
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::corpus::memory::MemoryCorpus;

    #[test]
    fn test_empty_corpus() {
        let set = collect_candidates(&MemoryCorpus::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_names_across_categories() {
        let corpus = MemoryCorpus::new()
            .with(Category::DesignLogs, "dl_1_a.md", "")
            .with(Category::Operations, "op_1_b.md", "")
            .with(Category::Artifacts, "art_1_c.png", "");
        let set = collect_candidates(&corpus);

        assert_eq!(set.len(), 3);
        assert_eq!(set.categories().get("dl_1_a.md").copied(), Some(Category::DesignLogs));
        assert_eq!(set.categories().get("op_1_b.md").copied(), Some(Category::Operations));
        assert_eq!(set.categories().get("art_1_c.png").copied(), Some(Category::Artifacts));
    }

    #[test]
    fn test_duplicate_name_last_category_wins() {
        let corpus = MemoryCorpus::new()
            .with(Category::DesignLogs, "notes.md", "")
            .with(Category::Artifacts, "notes.md", "");
        let set = collect_candidates(&corpus);

        assert_eq!(set.names(), &["notes.md".to_string()]);
        assert_eq!(set.categories().get("notes.md").copied(), Some(Category::Artifacts));
    }
}
