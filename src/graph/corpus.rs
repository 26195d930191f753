//! Document sources feeding the reference graph pipeline.

use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::models::Category;
use crate::workspace::Workspace;

/// A document found under one of the category directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Bare filename, the identity used in edges.
    pub name: String,
    /// Category directory the file was physically found in.
    pub category: Category,
    /// Location understood by the owning corpus.
    pub path: PathBuf,
}

/// Supplies directory listings and file contents to the pipeline.
pub trait Corpus {
    /// All documents of a category, subdirectories included, in a stable order.
    fn documents(&self, category: Category) -> Vec<DocumentEntry>;

    /// Full text of a document.
    fn read(&self, entry: &DocumentEntry) -> io::Result<String>;
}

/// File-system corpus over an initialized workspace.
pub struct FsCorpus<'a> {
    workspace: &'a Workspace,
}

impl<'a> FsCorpus<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }
}

impl Corpus for FsCorpus<'_> {
    fn documents(&self, category: Category) -> Vec<DocumentEntry> {
        let dir = self.workspace.category_dir(category);
        if !dir.is_dir() {
            return Vec::new();
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, dir = %dir.display(), "Skipping unwalkable entry");
                    continue;
                }
            };

            // Symlinked files count; symlinked directories are not descended.
            if !entry.path().is_file() {
                continue;
            }

            entries.push(DocumentEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                category,
                path: entry.into_path(),
            });
        }

        entries
    }

    fn read(&self, entry: &DocumentEntry) -> io::Result<String> {
        std::fs::read_to_string(&entry.path)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;

    /// In-memory corpus; a document with `None` content fails to read.
    #[derive(Default)]
    pub struct MemoryCorpus {
        docs: Vec<(DocumentEntry, Option<String>)>,
    }

    impl MemoryCorpus {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, category: Category, name: &str, content: &str) -> Self {
            self.push(category, name, Some(content.to_string()));
            self
        }

        pub fn with_unreadable(mut self, category: Category, name: &str) -> Self {
            self.push(category, name, None);
            self
        }

        fn push(&mut self, category: Category, name: &str, content: Option<String>) {
            let path = PathBuf::from(category.dir_name()).join(name);
            self.docs.push((
                DocumentEntry {
                    name: name.to_string(),
                    category,
                    path,
                },
                content,
            ));
        }
    }

    impl Corpus for MemoryCorpus {
        fn documents(&self, category: Category) -> Vec<DocumentEntry> {
            self.docs
                .iter()
                .filter(|(entry, _)| entry.category == category)
                .map(|(entry, _)| entry.clone())
                .collect()
        }

        fn read(&self, entry: &DocumentEntry) -> io::Result<String> {
            self.docs
                .iter()
                .find(|(e, _)| e == entry)
                .and_then(|(_, content)| content.clone())
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "unreadable"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_fs_corpus_walks_subdirectories_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::locate(dir.path(), &Config::default());
        let dl = ws.category_dir(Category::DesignLogs);
        std::fs::create_dir_all(dl.join("archived")).unwrap();
        std::fs::write(dl.join("dl_2_b.md"), "b").unwrap();
        std::fs::write(dl.join("dl_1_a.md"), "a").unwrap();
        std::fs::write(dl.join("archived").join("dl_0_old.md"), "old").unwrap();

        let corpus = FsCorpus::new(&ws);
        let mut names: Vec<String> = corpus
            .documents(Category::DesignLogs)
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["dl_0_old.md", "dl_1_a.md", "dl_2_b.md"]);
    }

    #[test]
    fn test_fs_corpus_missing_category_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::locate(dir.path(), &Config::default());
        let corpus = FsCorpus::new(&ws);
        assert!(corpus.documents(Category::Artifacts).is_empty());
    }
}
