//! CLI module for Glyph.
//!
//! Subcommands:
//! - `mcp`: Run the MCP server (stdio transport)
//! - `init`: Create the assistant directory in a project
//! - `graph`: Rebuild the reference graph once

mod graph;
mod init;
mod mcp;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Glyph - documentation workspace and reference graph
#[derive(Parser)]
#[command(name = "glyph")]
#[command(about = "Documentation workspace MCP server with a cross-reference graph")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the MCP server (stdio transport)
    Mcp,

    /// Create the assistant directory under a project root
    Init {
        /// Project root
        path: PathBuf,

        /// Back up and replace an existing assistant directory
        #[arg(long)]
        overwrite: bool,
    },

    /// Rebuild the reference graph and print statistics
    Graph {
        /// Project root
        path: PathBuf,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Mcp => self.run_mcp().await,
            Command::Init { ref path, overwrite } => self.run_init(path, overwrite),
            Command::Graph { ref path } => self.run_graph(path),
        }
    }
}

/// Resolve a CLI path argument against the current directory.
fn absolute(path: &std::path::Path) -> color_eyre::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
