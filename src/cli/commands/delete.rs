use colored::*;

use super::DeleteArgs;
use crate::api::{Connector, Resource};
use crate::commands::{delete_glossary, delete_usages};

pub async fn handle_delete(
    connector: &dyn Connector,
    resource: Resource,
    args: DeleteArgs,
) -> anyhow::Result<()> {
    let response = match resource {
        Resource::Properties => delete_glossary(connector, &args.url, &args.token, &args.workspace).await?,
        Resource::Usages => delete_usages(connector, &args.url, &args.token, &args.workspace).await?,
    };

    match response {
        Some(body) => {
            println!(
                "{} {} deleted from workspace '{}'",
                "✓".bright_green().bold(),
                resource.to_string().bright_white().bold(),
                args.workspace.bright_yellow()
            );
            println!("  {}", serde_json::to_string_pretty(&body)?.dimmed());
        }
        None => println!(
            "{} No {} in workspace '{}', nothing deleted",
            "⚠".bright_yellow().bold(),
            resource,
            args.workspace.bright_yellow()
        ),
    }
    Ok(())
}
