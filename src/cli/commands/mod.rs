pub mod attributes;
pub mod copy;
pub mod delete;

use clap::Args;

use super::Commands;
use crate::api::{Connector, NewModule, Resource};
use crate::commands::CopyRequest;

/// Source and target coordinates shared by every workspace copy
#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    #[arg(long, help = "Base API url of the source client space")]
    pub url_source: String,

    #[arg(long, help = "Base API url of the target client space (defaults to the source)")]
    pub url_target: Option<String>,

    #[arg(long, env = "DATAGALAXY_TOKEN_SOURCE", hide_env_values = true, help = "Integration token of the source client space")]
    pub token_source: String,

    #[arg(long, env = "DATAGALAXY_TOKEN_TARGET", hide_env_values = true, help = "Integration token of the target client space (defaults to the source)")]
    pub token_target: Option<String>,

    #[arg(long, help = "Source workspace name")]
    pub workspace_source: String,

    #[arg(long, help = "Source version name (versioned workspaces only)")]
    pub version_source: Option<String>,

    #[arg(long, help = "Target workspace name")]
    pub workspace_target: String,

    #[arg(long, help = "Target version name (versioned workspaces only)")]
    pub version_target: Option<String>,

    #[arg(long, help = "Only copy objects carrying this tag, with their ancestors")]
    pub tag_value: Option<String>,
}

impl From<CopyArgs> for CopyRequest {
    fn from(args: CopyArgs) -> Self {
        Self {
            url_source: args.url_source,
            url_target: args.url_target,
            token_source: args.token_source,
            token_target: args.token_target,
            workspace_source: args.workspace_source,
            version_source: args.version_source,
            workspace_target: args.workspace_target,
            version_target: args.version_target,
            tag_value: args.tag_value,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CopyAttributesArgs {
    #[arg(long, help = "Base API url of the source client space")]
    pub url_source: String,

    #[arg(long, help = "Base API url of the target client space")]
    pub url_target: String,

    #[arg(long, env = "DATAGALAXY_TOKEN_SOURCE", hide_env_values = true, help = "Integration token of the source client space")]
    pub token_source: String,

    #[arg(long, env = "DATAGALAXY_TOKEN_TARGET", hide_env_values = true, help = "Integration token of the target client space")]
    pub token_target: String,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    #[arg(long, help = "Base API url of the client space")]
    pub url: String,

    #[arg(long, env = "DATAGALAXY_TOKEN", hide_env_values = true, help = "Integration token of the client space")]
    pub token: String,

    #[arg(long, help = "Workspace name")]
    pub workspace: String,
}

/// Dispatch a parsed subcommand
pub async fn run(command: Commands, connector: &dyn Connector) -> anyhow::Result<()> {
    match command {
        Commands::CopyGlossary(args) => copy::handle_copy_glossary(connector, args.into()).await,
        Commands::CopyUsages(args) => copy::handle_copy_usages(connector, args.into()).await,
        Commands::CopyAttributes(args) => attributes::handle_copy_attributes(connector, args).await,
        Commands::DeleteGlossary(args) => {
            delete::handle_delete(connector, Resource::Properties, args).await
        }
        Commands::DeleteUsages(args) => delete::handle_delete(connector, Resource::Usages, args).await,
        Commands::CopyStrategy(args) => {
            copy::handle_copy_module(connector, NewModule::Strategy, args.into()).await
        }
        Commands::CopyGovernance(args) => {
            copy::handle_copy_module(connector, NewModule::Governance, args.into()).await
        }
        Commands::CopyProducts(args) => {
            copy::handle_copy_module(connector, NewModule::Products, args.into()).await
        }
    }
}
