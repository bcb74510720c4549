use colored::*;

use crate::api::{BulkResult, Connector, NewModule};
use crate::commands::{CopyRequest, copy_glossary, copy_module, copy_usages};

pub async fn handle_copy_glossary(connector: &dyn Connector, request: CopyRequest) -> anyhow::Result<()> {
    let result = copy_glossary(connector, &request).await?;
    print_bulk_result("Glossary", &request, &result);
    Ok(())
}

pub async fn handle_copy_usages(connector: &dyn Connector, request: CopyRequest) -> anyhow::Result<()> {
    let result = copy_usages(connector, &request).await?;
    print_bulk_result("Usages", &request, &result);
    Ok(())
}

pub async fn handle_copy_module(
    connector: &dyn Connector,
    module: NewModule,
    request: CopyRequest,
) -> anyhow::Result<()> {
    let created = copy_module(connector, module, &request).await?;
    if created == 0 {
        println!("{} Nothing to copy in module {}", "⚠".bright_yellow().bold(), module.to_string().bright_yellow());
        return Ok(());
    }
    println!(
        "{} {} objects of module {} copied from '{}' to '{}'",
        "✓".bright_green().bold(),
        created.to_string().bright_white().bold(),
        module.to_string().bright_blue(),
        request.workspace_source.bright_yellow(),
        request.workspace_target.bright_yellow()
    );
    Ok(())
}

fn print_bulk_result(label: &str, request: &CopyRequest, result: &BulkResult) {
    if result.total == 0 {
        println!("{} {} : nothing was copied", "⚠".bright_yellow().bold(), label);
        return;
    }
    println!(
        "{} {} copied from '{}' to '{}'",
        "✓".bright_green().bold(),
        label.bright_white().bold(),
        request.workspace_source.bright_yellow(),
        request.workspace_target.bright_yellow()
    );
    println!("  {} {}", "total:    ".dimmed(), result.total);
    println!("  {} {}", "created:  ".dimmed(), result.created.to_string().bright_green());
    println!("  {} {}", "updated:  ".dimmed(), result.updated.to_string().bright_blue());
    println!("  {} {}", "unchanged:".dimmed(), result.unchanged);
    println!("  {} {}", "deleted:  ".dimmed(), result.deleted.to_string().bright_red());
}
