//! Document service: workspace scaffolding and numbered document creation.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;
use crate::graph::ReferenceGraph;
use crate::models::Category;
use crate::repositories::DocumentRepository;
use crate::templates;
use crate::workspace::Workspace;

use super::ReferenceGraphService;

/// Result of initializing a workspace.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceInitialized {
    /// The new marker directory.
    pub root: PathBuf,
    /// Where a previous workspace was moved, if one existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
}

/// A newly created numbered document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentCreated {
    pub filename: String,
    pub path: PathBuf,
    /// Whether an entry was appended to the design log summary.
    pub summary_updated: bool,
}

/// A file copied into the artifacts directory.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactPersisted {
    pub filename: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Service for the workspace structure and its documents.
#[derive(Clone)]
pub struct DocumentService {
    config: Arc<Config>,
    documents: DocumentRepository,
}

crate::from_context!(DocumentService { config, documents });

impl DocumentService {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            documents: DocumentRepository,
        }
    }

    /// Create the workspace directory tree under `base`.
    ///
    /// An existing workspace is only replaced when `overwrite` is set, and is
    /// first moved aside to `<marker>_backup_<mtime>`.
    pub fn init_workspace(
        &self,
        base: &Path,
        overwrite: bool,
    ) -> Result<WorkspaceInitialized, AppError> {
        let workspace = Workspace::locate(base, &self.config);
        let mut backup = None;

        if workspace.is_initialized() {
            if !overwrite {
                return Err(AppError::AlreadyInitialized(workspace.root().to_path_buf()));
            }
            let backup_path = self.backup_path(base, workspace.root())?;
            std::fs::rename(workspace.root(), &backup_path)
                .map_err(|e| AppError::io(workspace.root(), e))?;
            tracing::info!(backup = %backup_path.display(), "Existing workspace backed up");
            backup = Some(backup_path);
        }

        self.documents.create_dir_all(&workspace.ad_hoc_dir())?;
        for &category in Category::all() {
            self.documents
                .create_dir_all(&workspace.category_dir(category).join("archived"))?;
        }
        self.documents.write(&workspace.summary_path(), templates::SUMMARY)?;

        ReferenceGraphService::new(self.config.clone())
            .write_outputs(&workspace, &ReferenceGraph::default())?;

        tracing::info!(root = %workspace.root().display(), "Workspace initialized");

        Ok(WorkspaceInitialized {
            root: workspace.root().to_path_buf(),
            backup,
        })
    }

    fn backup_path(&self, base: &Path, root: &Path) -> Result<PathBuf, AppError> {
        let modified = std::fs::metadata(root)
            .and_then(|m| m.modified())
            .map_err(|e| AppError::io(root, e))?;
        let secs = modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Ok(base.join(format!("{}_backup_{}", self.config.workspace.marker, secs)))
    }

    /// Add `dl_<n>_<title>.md` and record it in the design log summary.
    pub fn add_design_log(
        &self,
        base: &Path,
        title: &str,
        short_desc: &str,
    ) -> Result<DocumentCreated, AppError> {
        let mut created = self.add_document(
            base,
            Category::DesignLogs,
            "dl",
            title,
            templates::DESIGN_LOG,
        )?;

        let workspace = Workspace::locate(base, &self.config);
        created.summary_updated = self.documents.append_summary_entry(
            &workspace.summary_path(),
            &created.filename,
            short_desc,
        )?;
        if !created.summary_updated {
            tracing::warn!(
                summary = %workspace.summary_path().display(),
                "Summary file missing, design log not indexed"
            );
        }

        Ok(created)
    }

    /// Add `op_<n>_<title>.md`.
    pub fn add_operation(&self, base: &Path, title: &str) -> Result<DocumentCreated, AppError> {
        self.add_document(base, Category::Operations, "op", title, templates::OPERATION)
    }

    fn add_document(
        &self,
        base: &Path,
        category: Category,
        prefix: &str,
        title: &str,
        template: &str,
    ) -> Result<DocumentCreated, AppError> {
        let workspace = Workspace::locate(base, &self.config);
        let dir = workspace.require_category_dir(category)?;

        let number = self.documents.next_number(&dir, prefix, Some(".md"))?;
        let filename = format!("{}_{}_{}.md", prefix, number, sanitize_title(title));
        let path = dir.join(&filename);
        self.documents.create(&path, template)?;

        tracing::info!(file = %filename, category = %category, "Document created");

        Ok(DocumentCreated {
            filename,
            path,
            summary_updated: false,
        })
    }

    /// Copy `source` into the artifacts directory as `art_<n>_<name>`.
    pub fn persist_artifact(
        &self,
        base: &Path,
        source: &Path,
    ) -> Result<ArtifactPersisted, AppError> {
        if !source.exists() {
            return Err(AppError::SourceNotFound(source.to_path_buf()));
        }
        if !source.is_file() {
            return Err(AppError::NotAFile(source.to_path_buf()));
        }

        let workspace = Workspace::locate(base, &self.config);
        let dir = workspace.require_category_dir(Category::Artifacts)?;

        let original = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| AppError::NotAFile(source.to_path_buf()))?;
        let number = self.documents.next_number(&dir, "art", None)?;
        let filename = format!("art_{}_{}", number, original);
        let destination = dir.join(&filename);
        self.documents.copy(source, &destination)?;

        tracing::info!(file = %filename, source = %source.display(), "Artifact persisted");

        Ok(ArtifactPersisted {
            filename,
            source: source.to_path_buf(),
            destination,
        })
    }
}

/// Spaces in a title become underscores in the filename.
pub fn sanitize_title(title: &str) -> String {
    title.replace(' ', "_")
}
