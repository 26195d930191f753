//! Graph command handler.

use std::path::Path;
use std::sync::Arc;

use color_eyre::Result;

use crate::config::Config;
use crate::services::ReferenceGraphService;

use super::{absolute, App};

impl App {
    /// Rebuild the reference graph once and print its statistics.
    pub fn run_graph(&self, path: &Path) -> Result<()> {
        let config = Arc::new(Config::load()?);
        let base = absolute(path)?;

        let update = ReferenceGraphService::new(config).update(&base)?;

        println!("CSV:      {}", update.csv_path.display());
        println!("Diagram:  {}", update.diagram_path.display());
        println!("Sources:  {}", update.source_count);
        println!("Edges:    {}", update.edge_count);
        println!("Nodes:    {}", update.node_count);
        println!("Mutual:   {}", update.bidirectional_count);
        println!("Files:    {} scanned, {} skipped", update.scanned, update.skipped);
        Ok(())
    }
}
