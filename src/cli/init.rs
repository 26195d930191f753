//! Init command handler.

use std::path::Path;
use std::sync::Arc;

use color_eyre::Result;

use crate::config::Config;
use crate::services::DocumentService;

use super::{absolute, App};

impl App {
    /// Create the assistant directory under `path`.
    pub fn run_init(&self, path: &Path, overwrite: bool) -> Result<()> {
        let config = Arc::new(Config::load()?);
        let base = absolute(path)?;

        let initialized = DocumentService::new(config).init_workspace(&base, overwrite)?;

        if let Some(backup) = &initialized.backup {
            println!("Backed up previous workspace to {}", backup.display());
        }
        println!("Initialized {}", initialized.root.display());
        Ok(())
    }
}
