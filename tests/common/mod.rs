#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use datagalaxy_toolbox::api::{
    ApiError, AttributeFormat, AttributeValue, AttributeValues, BulkResult, CatalogApi,
    CatalogObject, Connector, CustomAttribute, Resource, ResolvedWorkspace, Version, Workspace,
};
use datagalaxy_toolbox::commands::CopyRequest;

pub const SOURCE_URL: &str = "https://source.example.com/v2";
pub const TARGET_URL: &str = "https://target.example.com/v2";

/// In-memory client space: seeded content plus a log of every write
#[derive(Debug, Default)]
pub struct CatalogState {
    pub workspaces: Vec<Workspace>,
    pub versions: Vec<Version>,
    pub properties: Vec<CatalogObject>,
    pub usages: Vec<CatalogObject>,
    pub objects: Vec<CatalogObject>,
    pub attributes: Vec<CustomAttribute>,
    /// Values by attribute key
    pub values: HashMap<String, Vec<AttributeValue>>,
    pub bulk_result: BulkResult,

    pub calls: Vec<&'static str>,
    pub property_upserts: Vec<Vec<CatalogObject>>,
    pub usage_upserts: Vec<Vec<CatalogObject>>,
    pub deletions: Vec<(Resource, String, Vec<String>)>,
    pub bulk_attribute_batches: Vec<Vec<CustomAttribute>>,
    pub created_attributes: Vec<CustomAttribute>,
    pub created_values: Vec<(String, String, AttributeValues)>,
    /// (parent id, object name, new id)
    pub created_objects: Vec<(Option<String>, String, String)>,
}

impl CatalogState {
    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

pub type SharedState = Arc<Mutex<CatalogState>>;

pub struct FakeCatalog {
    url: String,
    state: SharedState,
}

impl FakeCatalog {
    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    fn url(&self) -> &str {
        &self.url
    }

    fn client_space_id(&self) -> &str {
        "fake-space"
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        let mut state = self.state();
        state.calls.push("list_workspaces");
        Ok(state.workspaces.clone())
    }

    async fn list_versions(&self, _workspace: &Workspace) -> Result<Vec<Version>, ApiError> {
        let mut state = self.state();
        state.calls.push("list_versions");
        Ok(state.versions.clone())
    }

    async fn list_properties(
        &self,
        _workspace: &ResolvedWorkspace,
    ) -> Result<Vec<CatalogObject>, ApiError> {
        let mut state = self.state();
        state.calls.push("list_properties");
        Ok(state.properties.clone())
    }

    async fn bulk_upsert_property_tree(
        &self,
        _workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> Result<BulkResult, ApiError> {
        let mut state = self.state();
        state.calls.push("bulk_upsert_property_tree");
        state.property_upserts.push(tree.to_vec());
        Ok(state.bulk_result)
    }

    async fn list_usages(
        &self,
        workspace: &ResolvedWorkspace,
    ) -> Result<Vec<CatalogObject>, ApiError> {
        workspace.require_unversioned()?;
        let mut state = self.state();
        state.calls.push("list_usages");
        Ok(state.usages.clone())
    }

    async fn bulk_upsert_usages_tree(
        &self,
        workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> Result<BulkResult, ApiError> {
        workspace.require_unversioned()?;
        let mut state = self.state();
        state.calls.push("bulk_upsert_usages_tree");
        state.usage_upserts.push(tree.to_vec());
        Ok(state.bulk_result)
    }

    async fn delete_objects(
        &self,
        resource: Resource,
        workspace: &ResolvedWorkspace,
        ids: &[String],
    ) -> Result<Value, ApiError> {
        let mut state = self.state();
        state.calls.push("delete_objects");
        state
            .deletions
            .push((resource, workspace.version_id.clone(), ids.to_vec()));
        Ok(json!({ "deleted": ids.len() }))
    }

    async fn list_attributes(&self) -> Result<Vec<CustomAttribute>, ApiError> {
        let mut state = self.state();
        state.calls.push("list_attributes");
        Ok(state.attributes.clone())
    }

    async fn bulk_create_attributes(
        &self,
        attributes: &[CustomAttribute],
    ) -> Result<u64, ApiError> {
        if attributes.is_empty() {
            return Ok(0);
        }
        let mut state = self.state();
        state.calls.push("bulk_create_attributes");
        state.bulk_attribute_batches.push(attributes.to_vec());
        Ok(attributes.len() as u64)
    }

    async fn create_attribute(
        &self,
        attribute: &CustomAttribute,
    ) -> Result<CustomAttribute, ApiError> {
        let mut state = self.state();
        state.calls.push("create_attribute");
        let mut created = attribute.clone();
        created.attribute_key = format!("{}-target", attribute.attribute_key);
        state.created_attributes.push(created.clone());
        Ok(created)
    }

    async fn list_values(
        &self,
        _data_type: &str,
        attribute_key: &str,
    ) -> Result<Vec<AttributeValue>, ApiError> {
        let mut state = self.state();
        state.calls.push("list_values");
        Ok(state.values.get(attribute_key).cloned().unwrap_or_default())
    }

    async fn create_values(
        &self,
        data_type: &str,
        attribute_key: &str,
        values: &AttributeValues,
    ) -> Result<(), ApiError> {
        let mut state = self.state();
        state.calls.push("create_values");
        state
            .created_values
            .push((data_type.to_string(), attribute_key.to_string(), values.clone()));
        Ok(())
    }

    async fn list_objects(
        &self,
        _workspace: &ResolvedWorkspace,
        object_type: &str,
    ) -> Result<Vec<CatalogObject>, ApiError> {
        let mut state = self.state();
        state.calls.push("list_objects");
        Ok(state
            .objects
            .iter()
            .filter(|o| o.object_type.as_deref() == Some(object_type))
            .cloned()
            .collect())
    }

    async fn create_object(
        &self,
        _workspace: &ResolvedWorkspace,
        parent_id: Option<&str>,
        object: &CatalogObject,
    ) -> Result<String, ApiError> {
        let mut state = self.state();
        state.calls.push("create_object");
        let new_id = format!("new-{}", state.created_objects.len() + 1);
        state.created_objects.push((
            parent_id.map(str::to_string),
            object.display_name().to_string(),
            new_id.clone(),
        ));
        Ok(new_id)
    }
}

/// Hands out [`FakeCatalog`] handles by url and records every (url, token) it sees
#[derive(Default)]
pub struct FakeConnector {
    catalogs: HashMap<String, SharedState>,
    pub connects: Mutex<Vec<(String, String)>>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client space at `url`, returning a handle on its state
    pub fn add_catalog(&mut self, url: &str, state: CatalogState) -> SharedState {
        let shared = Arc::new(Mutex::new(state));
        self.catalogs.insert(url.to_string(), shared.clone());
        shared
    }

    pub fn connections(&self) -> Vec<(String, String)> {
        self.connects.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for FakeConnector {
    async fn connect(&self, url: &str, token: &str) -> Result<Box<dyn CatalogApi>, ApiError> {
        self.connects
            .lock()
            .unwrap()
            .push((url.to_string(), token.to_string()));

        let Some(state) = self.catalogs.get(url) else {
            return Err(ApiError::Upstream {
                status: Some(401),
                message: "invalid token".to_string(),
            });
        };
        Ok(Box::new(FakeCatalog {
            url: url.to_string(),
            state: state.clone(),
        }))
    }
}

pub fn workspace(id: &str, name: &str) -> Workspace {
    Workspace {
        id: id.to_string(),
        name: name.to_string(),
        is_versioning_enabled: false,
        default_version_id: Some(format!("{}-v1", id)),
        version_id: None,
    }
}

pub fn versioned_workspace(id: &str, name: &str) -> Workspace {
    Workspace {
        is_versioning_enabled: true,
        ..workspace(id, name)
    }
}

pub fn attribute(name: &str, format: AttributeFormat) -> CustomAttribute {
    CustomAttribute {
        name: name.to_string(),
        format,
        data_type: "common".to_string(),
        attribute_key: format!("key-{}", name),
        is_custom: true,
        extra: Map::new(),
    }
}

pub fn value(key: &str) -> AttributeValue {
    AttributeValue {
        key: key.to_string(),
        extra: Map::new(),
    }
}

pub fn copy_request(workspace_source: &str, workspace_target: &str) -> CopyRequest {
    CopyRequest {
        url_source: SOURCE_URL.to_string(),
        url_target: Some(TARGET_URL.to_string()),
        token_source: "token-source".to_string(),
        token_target: Some("token-target".to_string()),
        workspace_source: workspace_source.to_string(),
        workspace_target: workspace_target.to_string(),
        ..CopyRequest::default()
    }
}
