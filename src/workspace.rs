//! Workspace and version resolution
//!
//! Every downstream call needs a concrete (workspace, version) pair. Names are
//! matched exactly; a name that does not resolve aborts the command.

use log::{error, info, warn};
use std::fmt;

use crate::api::{ApiError, CatalogApi, ResolvedWorkspace};

/// Which side of a copy a workspace belongs to, used in messages only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Resolve `workspace_name` (and `version_name` for versioned workspaces) on `api`
pub async fn config_workspace(
    side: Side,
    api: &dyn CatalogApi,
    workspace_name: &str,
    version_name: Option<&str>,
) -> Result<ResolvedWorkspace, ApiError> {
    let Some(workspace) = api.get_workspace(workspace_name).await? else {
        error!("{} workspace {} does not exist on {}", side, workspace_name, api.url());
        return Err(ApiError::workspace_not_found(workspace_name));
    };

    let resolved = match version_name {
        Some(version_name) if workspace.is_versioning_enabled => {
            let versions = api.list_versions(&workspace).await?;
            let Some(version) = versions.into_iter().find(|v| v.version_name == version_name)
            else {
                error!(
                    "{} version {} does not exist in workspace {}",
                    side, version_name, workspace_name
                );
                return Err(ApiError::version_not_found(version_name, workspace_name));
            };
            ResolvedWorkspace {
                workspace,
                version_id: version.version_id,
            }
        }
        Some(version_name) => {
            warn!(
                "{} workspace {} is not versioned, ignoring version {}",
                side, workspace_name, version_name
            );
            ResolvedWorkspace::with_default_version(workspace)?
        }
        None => ResolvedWorkspace::with_default_version(workspace)?,
    };

    info!(
        "{} workspace {} resolved to version {}",
        side, workspace_name, resolved.version_id
    );
    Ok(resolved)
}
