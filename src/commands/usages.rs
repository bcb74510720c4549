use async_trait::async_trait;

use super::{CopyRequest, TreeResource, copy_tree};
use crate::api::{BulkResult, CatalogApi, CatalogObject, Connector, ResolvedWorkspace};

struct Usages;

#[async_trait]
impl TreeResource for Usages {
    fn label(&self) -> &'static str {
        "usages"
    }

    fn validate(
        &self,
        source: &ResolvedWorkspace,
        target: &ResolvedWorkspace,
    ) -> anyhow::Result<()> {
        source.require_unversioned()?;
        target.require_unversioned()?;
        Ok(())
    }

    async fn list(
        &self,
        api: &dyn CatalogApi,
        workspace: &ResolvedWorkspace,
    ) -> anyhow::Result<Vec<CatalogObject>> {
        Ok(api.list_usages(workspace).await?)
    }

    async fn upsert(
        &self,
        api: &dyn CatalogApi,
        workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> anyhow::Result<BulkResult> {
        Ok(api.bulk_upsert_usages_tree(workspace, tree).await?)
    }
}

/// Copy the usage tree of one workspace into another. Both workspaces must
/// have versioning disabled.
pub async fn copy_usages(
    connector: &dyn Connector,
    request: &CopyRequest,
) -> anyhow::Result<BulkResult> {
    copy_tree(&Usages, connector, request).await
}
