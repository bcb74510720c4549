//! Command orchestrators
//!
//! Each command connects to its catalogs through a [`Connector`], resolves
//! workspaces, reads from the source, reshapes, and writes to the target.
//! Calls are issued one after the other; a failure stops the command and
//! anything already written to the target stays there.

pub mod attributes;
pub mod delete;
pub mod glossary;
pub mod modules;
pub mod usages;

pub use attributes::copy_attributes;
pub use delete::{delete_glossary, delete_usages};
pub use glossary::copy_glossary;
pub use modules::copy_module;
pub use usages::copy_usages;

use crate::api::{BulkResult, CatalogApi, CatalogObject, Connector, ResolvedWorkspace};
use crate::bulk;
use crate::workspace::{Side, config_workspace};
use async_trait::async_trait;
use log::{info, warn};

/// Source and target coordinates of a workspace-to-workspace copy.
/// Target url and token default to the source ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyRequest {
    pub url_source: String,
    pub url_target: Option<String>,
    pub token_source: String,
    pub token_target: Option<String>,
    pub workspace_source: String,
    pub version_source: Option<String>,
    pub workspace_target: String,
    pub version_target: Option<String>,
    pub tag_value: Option<String>,
}

impl CopyRequest {
    pub fn target_url(&self) -> &str {
        self.url_target.as_deref().unwrap_or(&self.url_source)
    }

    pub fn target_token(&self) -> &str {
        self.token_target.as_deref().unwrap_or(&self.token_source)
    }
}

/// Both sides of a copy, authenticated and resolved
pub(crate) struct Connected {
    pub source: Box<dyn CatalogApi>,
    pub target: Box<dyn CatalogApi>,
    pub source_workspace: ResolvedWorkspace,
    pub target_workspace: ResolvedWorkspace,
}

/// Authenticate both sides (twice against the same pair when the target
/// falls back to the source), then resolve the target workspace before the
/// source one.
pub(crate) async fn connect_both(
    connector: &dyn Connector,
    request: &CopyRequest,
) -> anyhow::Result<Connected> {
    let source = connector
        .connect(&request.url_source, &request.token_source)
        .await?;
    let target = connector
        .connect(request.target_url(), request.target_token())
        .await?;

    let target_workspace = config_workspace(
        Side::Target,
        target.as_ref(),
        &request.workspace_target,
        request.version_target.as_deref(),
    )
    .await?;
    let source_workspace = config_workspace(
        Side::Source,
        source.as_ref(),
        &request.workspace_source,
        request.version_source.as_deref(),
    )
    .await?;

    Ok(Connected {
        source,
        target,
        source_workspace,
        target_workspace,
    })
}

/// A resource copied through the bulk tree endpoints
#[async_trait]
pub(crate) trait TreeResource: Send + Sync {
    fn label(&self) -> &'static str;

    /// Reject workspaces this resource cannot be copied between, before any read
    fn validate(
        &self,
        _source: &ResolvedWorkspace,
        _target: &ResolvedWorkspace,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    async fn list(
        &self,
        api: &dyn CatalogApi,
        workspace: &ResolvedWorkspace,
    ) -> anyhow::Result<Vec<CatalogObject>>;

    async fn upsert(
        &self,
        api: &dyn CatalogApi,
        workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> anyhow::Result<BulkResult>;
}

/// Shared flow of `copy-glossary` and `copy-usages`
pub(crate) async fn copy_tree(
    resource: &dyn TreeResource,
    connector: &dyn Connector,
    request: &CopyRequest,
) -> anyhow::Result<BulkResult> {
    let connected = connect_both(connector, request).await?;
    resource.validate(&connected.source_workspace, &connected.target_workspace)?;

    let objects = resource
        .list(connected.source.as_ref(), &connected.source_workspace)
        .await?;
    if objects.is_empty() {
        warn!(
            "copy_{} - no {} in source workspace {}, nothing to copy",
            resource.label(),
            resource.label(),
            request.workspace_source
        );
        return Ok(BulkResult::default());
    }

    let tree = bulk::prepare_bulk_tree(objects, request.tag_value.as_deref());
    if tree.is_empty() {
        warn!(
            "copy_{} - no {} tagged {:?} in source workspace {}, nothing to copy",
            resource.label(),
            resource.label(),
            request.tag_value,
            request.workspace_source
        );
        return Ok(BulkResult::default());
    }
    info!(
        "copy_{} - {} root objects ({} in total) to send to workspace {}",
        resource.label(),
        tree.len(),
        tree.iter().map(|root| root.subtree_len()).sum::<usize>(),
        request.workspace_target
    );

    resource
        .upsert(connected.target.as_ref(), &connected.target_workspace, &tree)
        .await
}
