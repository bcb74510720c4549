use colored::*;

use super::CopyAttributesArgs;
use crate::api::Connector;
use crate::commands::copy_attributes;

pub async fn handle_copy_attributes(
    connector: &dyn Connector,
    args: CopyAttributesArgs,
) -> anyhow::Result<()> {
    let created = copy_attributes(
        connector,
        &args.url_source,
        &args.url_target,
        &args.token_source,
        &args.token_target,
    )
    .await?;

    println!(
        "{} {} custom attributes created in bulk on {}",
        "✓".bright_green().bold(),
        created.to_string().bright_white().bold(),
        args.url_target.bright_yellow()
    );
    println!(
        "  {}",
        "Attributes with values are created one by one, see the log for details".dimmed()
    );
    Ok(())
}
