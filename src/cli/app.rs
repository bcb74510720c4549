use super::commands::{CopyArgs, CopyAttributesArgs, DeleteArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datagalaxy-toolbox")]
#[command(about = "Copy and clean up DataGalaxy catalog content between workspaces", version)]
pub struct Cli {
    /// Request timeout in seconds, overrides the config file
    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, help = "Path of the log file")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy the glossary of a workspace into another workspace
    CopyGlossary(CopyArgs),
    /// Copy the usages of a workspace into another workspace
    CopyUsages(CopyArgs),
    /// Copy custom attributes between client spaces
    CopyAttributes(CopyAttributesArgs),
    /// Delete every glossary property of a workspace
    DeleteGlossary(DeleteArgs),
    /// Delete every usage of a workspace
    DeleteUsages(DeleteArgs),
    /// Copy the Strategy module of a workspace
    CopyStrategy(CopyArgs),
    /// Copy the Governance module of a workspace
    CopyGovernance(CopyArgs),
    /// Copy the Products module of a workspace
    CopyProducts(CopyArgs),
}
