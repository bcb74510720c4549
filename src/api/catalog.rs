//! Collaborator seams between the commands and a catalog instance

use async_trait::async_trait;
use serde_json::Value;

use super::constants::Resource;
use super::error::ApiError;
use super::models::{
    AttributeValue, AttributeValues, BulkResult, CatalogObject, CustomAttribute,
    ResolvedWorkspace, Version, Workspace,
};

/// Authenticated access to one catalog client space
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Base URL this handle talks to
    fn url(&self) -> &str;

    fn client_space_id(&self) -> &str;

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError>;

    /// Exact, case-sensitive lookup by name
    async fn get_workspace(&self, name: &str) -> Result<Option<Workspace>, ApiError> {
        let workspaces = self.list_workspaces().await?;
        Ok(workspaces.into_iter().find(|w| w.name == name))
    }

    async fn list_versions(&self, workspace: &Workspace) -> Result<Vec<Version>, ApiError>;

    // Glossary
    async fn list_properties(
        &self,
        workspace: &ResolvedWorkspace,
    ) -> Result<Vec<CatalogObject>, ApiError>;

    async fn bulk_upsert_property_tree(
        &self,
        workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> Result<BulkResult, ApiError>;

    // Usages (non-versioned workspaces only)
    async fn list_usages(
        &self,
        workspace: &ResolvedWorkspace,
    ) -> Result<Vec<CatalogObject>, ApiError>;

    async fn bulk_upsert_usages_tree(
        &self,
        workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> Result<BulkResult, ApiError>;

    async fn delete_objects(
        &self,
        resource: Resource,
        workspace: &ResolvedWorkspace,
        ids: &[String],
    ) -> Result<Value, ApiError>;

    // Attributes (client-space wide)

    /// Custom attributes only; system attributes are left out
    async fn list_attributes(&self) -> Result<Vec<CustomAttribute>, ApiError>;

    async fn bulk_create_attributes(
        &self,
        attributes: &[CustomAttribute],
    ) -> Result<u64, ApiError>;

    async fn create_attribute(
        &self,
        attribute: &CustomAttribute,
    ) -> Result<CustomAttribute, ApiError>;

    async fn list_values(
        &self,
        data_type: &str,
        attribute_key: &str,
    ) -> Result<Vec<AttributeValue>, ApiError>;

    async fn create_values(
        &self,
        data_type: &str,
        attribute_key: &str,
        values: &AttributeValues,
    ) -> Result<(), ApiError>;

    // New modules
    async fn list_objects(
        &self,
        workspace: &ResolvedWorkspace,
        object_type: &str,
    ) -> Result<Vec<CatalogObject>, ApiError>;

    /// Create one object under `parent_id` (the workspace root when `None`), returning its id
    async fn create_object(
        &self,
        workspace: &ResolvedWorkspace,
        parent_id: Option<&str>,
        object: &CatalogObject,
    ) -> Result<String, ApiError>;
}

/// Authenticates a (url, token) pair and hands back an API handle bound to it
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, url: &str, token: &str) -> Result<Box<dyn CatalogApi>, ApiError>;
}
