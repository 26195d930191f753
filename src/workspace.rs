//! Workspace layout: the marker directory and the paths derived from it.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::AppError;
use crate::models::Category;

/// Ensure a user-supplied project path is absolute.
pub fn validate_absolute_path(path: &str) -> Result<&Path, AppError> {
    let candidate = Path::new(path);
    if path.starts_with('.') || !candidate.is_absolute() {
        return Err(AppError::InvalidPath(path.to_string()));
    }
    Ok(candidate)
}

/// An initialized documentation workspace rooted at `<base>/<marker>`.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    summary_file: String,
    csv_file: String,
    diagram_file: String,
}

impl Workspace {
    /// Build the layout without checking the file system.
    pub fn locate(base: &Path, config: &Config) -> Self {
        Self {
            root: base.join(&config.workspace.marker),
            summary_file: config.workspace.summary_file.clone(),
            csv_file: config.graph.csv_file.clone(),
            diagram_file: config.graph.diagram_file.clone(),
        }
    }

    /// Open the workspace, failing if the marker directory is missing.
    pub fn open(base: &Path, config: &Config) -> Result<Self, AppError> {
        let workspace = Self::locate(base, config);
        if !workspace.root.is_dir() {
            return Err(AppError::WorkspaceNotInitialized {
                path: workspace.root,
            });
        }
        Ok(workspace)
    }

    /// The marker directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        self.root.is_dir()
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Category directory that must already exist.
    pub fn require_category_dir(&self, category: Category) -> Result<PathBuf, AppError> {
        let dir = self.category_dir(category);
        if !dir.is_dir() {
            return Err(AppError::WorkspaceNotInitialized { path: dir });
        }
        Ok(dir)
    }

    pub fn ad_hoc_dir(&self) -> PathBuf {
        self.root.join("ad_hoc")
    }

    /// Name of the design log index, excluded as a scan source.
    pub fn summary_file(&self) -> &str {
        &self.summary_file
    }

    pub fn summary_path(&self) -> PathBuf {
        self.category_dir(Category::DesignLogs).join(&self.summary_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.root.join(&self.csv_file)
    }

    pub fn diagram_path(&self) -> PathBuf {
        self.root.join(&self.diagram_file)
    }
}
