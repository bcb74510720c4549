use async_trait::async_trait;

use super::{CopyRequest, TreeResource, copy_tree};
use crate::api::{BulkResult, CatalogApi, CatalogObject, Connector, ResolvedWorkspace};

struct Glossary;

#[async_trait]
impl TreeResource for Glossary {
    fn label(&self) -> &'static str {
        "glossary"
    }

    async fn list(
        &self,
        api: &dyn CatalogApi,
        workspace: &ResolvedWorkspace,
    ) -> anyhow::Result<Vec<CatalogObject>> {
        Ok(api.list_properties(workspace).await?)
    }

    async fn upsert(
        &self,
        api: &dyn CatalogApi,
        workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> anyhow::Result<BulkResult> {
        Ok(api.bulk_upsert_property_tree(workspace, tree).await?)
    }
}

/// Copy the glossary properties of one workspace into another
pub async fn copy_glossary(
    connector: &dyn Connector,
    request: &CopyRequest,
) -> anyhow::Result<BulkResult> {
    copy_tree(&Glossary, connector, request).await
}
