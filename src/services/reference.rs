//! Reference graph service: rebuild, persist, and query the graph.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;
use crate::graph::{self, render, FsCorpus, ReferenceGraph};
use crate::models::ReferenceEdge;
use crate::repositories::DocumentRepository;
use crate::workspace::Workspace;

/// Outcome of a reference graph rebuild.
#[derive(Debug, Clone, Serialize)]
pub struct GraphUpdate {
    /// Where the edge list was written.
    pub csv_path: PathBuf,
    /// Where the diagram was written.
    pub diagram_path: PathBuf,
    /// Flat edge count.
    pub edge_count: usize,
    /// Documents with at least one outgoing reference.
    pub source_count: usize,
    /// Documents appearing in at least one edge.
    pub node_count: usize,
    /// Pairs drawn as a single bidirectional connector.
    pub bidirectional_count: usize,
    /// Documents read.
    pub scanned: usize,
    /// Documents skipped because they could not be read.
    pub skipped: usize,
}

/// Service orchestrating the graph pipeline over a workspace on disk.
///
/// Every call rescans the whole workspace; nothing is cached between calls.
/// Concurrent calls against the same workspace race on the output files.
#[derive(Clone)]
pub struct ReferenceGraphService {
    config: Arc<Config>,
    documents: DocumentRepository,
}

crate::from_context!(ReferenceGraphService { config, documents });

impl ReferenceGraphService {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            documents: DocumentRepository,
        }
    }

    /// Rebuild the graph and overwrite both output artifacts.
    pub fn update(&self, base: &Path) -> Result<GraphUpdate, AppError> {
        let workspace = Workspace::open(base, &self.config)?;
        let corpus = FsCorpus::new(&workspace);
        let graph = ReferenceGraph::build(&corpus, workspace.summary_file());
        self.write_outputs(&workspace, &graph)
    }

    /// Write the CSV edge list and the diagram for `graph`.
    pub fn write_outputs(
        &self,
        workspace: &Workspace,
        graph: &ReferenceGraph,
    ) -> Result<GraphUpdate, AppError> {
        let csv_path = workspace.csv_path();
        let diagram_path = workspace.diagram_path();

        let csv = render::render_csv(graph.edges())?;
        self.documents.write_output(&csv_path, &csv)?;

        let diagram = render::render_mermaid(graph, &self.config.graph.direction);
        self.documents.write_output(&diagram_path, &diagram)?;

        let update = GraphUpdate {
            csv_path,
            diagram_path,
            edge_count: graph.edge_count(),
            source_count: graph.source_count(),
            node_count: graph.node_count(),
            bidirectional_count: graph.bidirectional_count(),
            scanned: graph.scanned(),
            skipped: graph.skipped(),
        };

        tracing::info!(
            edges = update.edge_count,
            sources = update.source_count,
            bidirectional = update.bidirectional_count,
            skipped = update.skipped,
            csv = %update.csv_path.display(),
            "Reference graph written"
        );

        Ok(update)
    }

    /// Files referenced by `file_name`, after a fresh rebuild.
    pub fn references_from(&self, base: &Path, file_name: &str) -> Result<Vec<String>, AppError> {
        let edges = self.rebuild_and_read(base)?;
        Ok(graph::references_from(&edges, file_name))
    }

    /// Files referencing `file_name`, after a fresh rebuild.
    pub fn references_to(&self, base: &Path, file_name: &str) -> Result<Vec<String>, AppError> {
        let edges = self.rebuild_and_read(base)?;
        Ok(graph::references_to(&edges, file_name))
    }

    fn rebuild_and_read(&self, base: &Path) -> Result<Vec<ReferenceEdge>, AppError> {
        let update = self
            .update(base)
            .map_err(|e| AppError::QueryDependencyFailed(Box::new(e)))?;
        self.read_edges(&update.csv_path)
    }

    /// Parse a previously written edge list.
    pub fn read_edges(&self, csv_path: &Path) -> Result<Vec<ReferenceEdge>, AppError> {
        let file = std::fs::File::open(csv_path).map_err(|e| AppError::io(csv_path, e))?;
        Ok(render::read_csv(file)?)
    }
}
