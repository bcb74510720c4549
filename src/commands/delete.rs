use log::{info, warn};
use serde_json::Value;

use crate::api::{Connector, Resource};
use crate::workspace::{Side, config_workspace};

/// Delete every glossary property of a workspace.
///
/// Returns the server's response body, or `None` when the workspace had
/// nothing to delete.
pub async fn delete_glossary(
    connector: &dyn Connector,
    url: &str,
    token: &str,
    workspace_name: &str,
) -> anyhow::Result<Option<Value>> {
    delete_all(Resource::Properties, connector, url, token, workspace_name).await
}

/// Delete every usage of a (non-versioned) workspace
pub async fn delete_usages(
    connector: &dyn Connector,
    url: &str,
    token: &str,
    workspace_name: &str,
) -> anyhow::Result<Option<Value>> {
    delete_all(Resource::Usages, connector, url, token, workspace_name).await
}

async fn delete_all(
    resource: Resource,
    connector: &dyn Connector,
    url: &str,
    token: &str,
    workspace_name: &str,
) -> anyhow::Result<Option<Value>> {
    let api = connector.connect(url, token).await?;
    let workspace = config_workspace(Side::Target, api.as_ref(), workspace_name, None).await?;

    let objects = match resource {
        Resource::Properties => api.list_properties(&workspace).await?,
        Resource::Usages => api.list_usages(&workspace).await?,
    };
    let ids: Vec<String> = objects.into_iter().map(|object| object.id).collect();

    if ids.is_empty() {
        warn!("delete_{} - nothing to delete in workspace {}", resource, workspace_name);
        return Ok(None);
    }

    info!(
        "delete_{} - deleting {} {} from workspace {}",
        resource,
        ids.len(),
        resource,
        workspace_name
    );
    let body = api.delete_objects(resource, &workspace, &ids).await?;
    Ok(Some(body))
}
