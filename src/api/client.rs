use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::auth;
use super::catalog::{CatalogApi, Connector};
use super::config::ClientConfig;
use super::constants::{self, Resource, headers};
use super::error::ApiError;
use super::models::{
    AccessToken, AttributeValue, AttributeValues, BulkResult, CatalogObject, CustomAttribute,
    ResolvedWorkspace, Version, Workspace,
};
use super::pagination::{self, Page, PageSource};

/// DataGalaxy REST API client bound to one client space
#[derive(Clone)]
pub struct CatalogClient {
    base_url: String,
    http_client: reqwest::Client,
    access_token: AccessToken,
    page_limit: u32,
}

/// List endpoints answer either with a bare array or with a first page
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody {
    Items(Vec<Value>),
    Paged(Page<Value>),
}

/// Keep the records flagged `isCustom` and decode only those. System
/// attributes use formats and shapes this crate does not model.
fn decode_custom_attributes(values: Vec<Value>) -> Result<Vec<CustomAttribute>, ApiError> {
    let custom: Vec<Value> = values
        .into_iter()
        .filter(|value| value.get("isCustom").and_then(Value::as_bool) == Some(true))
        .collect();
    pagination::decode_all(custom)
}

#[derive(Deserialize)]
struct BulkCreateResponse {
    created: u64,
}

#[derive(Deserialize)]
struct CreatedObject {
    id: String,
}

impl CatalogClient {
    pub fn new(
        base_url: impl Into<String>,
        access_token: AccessToken,
        config: &ClientConfig,
    ) -> Result<Self, ApiError> {
        let http_client = config.build_http_client()?;
        Ok(Self::with_http_client(
            base_url,
            access_token,
            http_client,
            config.page_limit,
        ))
    }

    /// Create a new client with a preconfigured HTTP client
    pub fn with_http_client(
        base_url: impl Into<String>,
        access_token: AccessToken,
        http_client: reqwest::Client,
        page_limit: u32,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
            access_token,
            page_limit,
        }
    }

    fn list_params(&self, version_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("versionId", version_id.to_string()),
            ("limit", self.page_limit.to_string()),
            ("includeAttributes", "true".to_string()),
        ]
    }

    /// Turn a response into its JSON body, or the matching error for non-2xx statuses
    async fn read_body(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, ApiError> {
        debug!("GET {}", url);
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.access_token.value)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .query(params)
            .send()
            .await?;
        Self::read_body(response).await
    }

    async fn send_json<B: Serialize + ?Sized + Sync>(
        &self,
        method: reqwest::Method,
        url: &str,
        params: &[(&str, String)],
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        debug!("{} {}", method, url);
        let response = self
            .http_client
            .request(method, url)
            .bearer_auth(&self.access_token.value)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .query(params)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// GET a list endpoint and follow its pages to the end
    async fn get_list(&self, url: &str, params: &[(&str, String)]) -> Result<Vec<Value>, ApiError> {
        let body = self.get_json(url, params).await?;
        match serde_json::from_value::<ListBody>(body)? {
            ListBody::Items(items) => Ok(items),
            ListBody::Paged(first) => pagination::collect_pages(self, first).await,
        }
    }

    async fn bulk_upsert_tree(
        &self,
        resource: Resource,
        version_id: &str,
        workspace_name: &str,
        tree: &[CatalogObject],
    ) -> Result<BulkResult, ApiError> {
        let url = constants::bulktree_endpoint(&self.base_url, resource, version_id);
        let response = self
            .send_json(reqwest::Method::POST, &url, &[], tree)
            .await?;
        let body = Self::read_body(response).await?;
        let result: BulkResult = serde_json::from_value(body)?;

        info!(
            "bulk_upsert_{}_tree - {} {} copied on workspace {}: {} were created, {} were updated, {} were deleted and {} were unchanged",
            resource,
            result.total,
            resource,
            workspace_name,
            result.created,
            result.updated,
            result.deleted,
            result.unchanged
        );
        Ok(result)
    }

    async fn list_resource(
        &self,
        resource: Resource,
        version_id: &str,
        workspace_name: &str,
    ) -> Result<Vec<CatalogObject>, ApiError> {
        let url = constants::resource_endpoint(&self.base_url, resource);
        let values = self.get_list(&url, &self.list_params(version_id)).await?;
        info!(
            "list_{} - {} {} found on workspace {}",
            resource,
            values.len(),
            resource,
            workspace_name
        );
        pagination::decode_all(values)
    }
}

#[async_trait]
impl PageSource for CatalogClient {
    async fn fetch_page(&self, url: &str) -> Result<Page<Value>, ApiError> {
        let body = self.get_json(url, &[]).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    fn url(&self) -> &str {
        &self.base_url
    }

    fn client_space_id(&self) -> &str {
        &self.access_token.client_space_id
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        let url = constants::workspaces_endpoint(&self.base_url);
        let values = self.get_list(&url, &[]).await?;
        debug!("list_workspaces - {} workspaces found", values.len());
        pagination::decode_all(values)
    }

    async fn list_versions(&self, workspace: &Workspace) -> Result<Vec<Version>, ApiError> {
        let url = constants::versions_endpoint(&self.base_url, &workspace.id);
        let values = self.get_list(&url, &[]).await?;
        debug!(
            "list_versions - {} versions found on workspace {}",
            values.len(),
            workspace.name
        );
        pagination::decode_all(values)
    }

    async fn list_properties(
        &self,
        workspace: &ResolvedWorkspace,
    ) -> Result<Vec<CatalogObject>, ApiError> {
        self.list_resource(Resource::Properties, &workspace.version_id, workspace.name())
            .await
    }

    async fn bulk_upsert_property_tree(
        &self,
        workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> Result<BulkResult, ApiError> {
        self.bulk_upsert_tree(
            Resource::Properties,
            &workspace.version_id,
            workspace.name(),
            tree,
        )
        .await
    }

    async fn list_usages(
        &self,
        workspace: &ResolvedWorkspace,
    ) -> Result<Vec<CatalogObject>, ApiError> {
        let version_id = workspace.require_unversioned()?;
        self.list_resource(Resource::Usages, version_id, workspace.name())
            .await
    }

    async fn bulk_upsert_usages_tree(
        &self,
        workspace: &ResolvedWorkspace,
        tree: &[CatalogObject],
    ) -> Result<BulkResult, ApiError> {
        let version_id = workspace.require_unversioned()?;
        self.bulk_upsert_tree(Resource::Usages, version_id, workspace.name(), tree)
            .await
    }

    async fn delete_objects(
        &self,
        resource: Resource,
        workspace: &ResolvedWorkspace,
        ids: &[String],
    ) -> Result<Value, ApiError> {
        let version_id = match resource {
            Resource::Usages => workspace.require_unversioned()?,
            Resource::Properties => workspace.version_id.as_str(),
        };
        let url = constants::bulk_delete_endpoint(&self.base_url, resource, version_id);
        let response = self
            .send_json(reqwest::Method::DELETE, &url, &[], ids)
            .await?;
        let body = Self::read_body(response).await?;
        info!(
            "delete_objects - {} {} deleted on workspace {}",
            ids.len(),
            resource,
            workspace.name()
        );
        Ok(body)
    }

    async fn list_attributes(&self) -> Result<Vec<CustomAttribute>, ApiError> {
        let url = constants::attributes_endpoint(&self.base_url);
        let values = self.get_list(&url, &[]).await?;
        debug!("list_attributes - {} attributes found", values.len());
        decode_custom_attributes(values)
    }

    async fn bulk_create_attributes(
        &self,
        attributes: &[CustomAttribute],
    ) -> Result<u64, ApiError> {
        if attributes.is_empty() {
            return Ok(0);
        }
        let url = constants::attributes_bulk_endpoint(&self.base_url);
        let response = self
            .send_json(reqwest::Method::POST, &url, &[], attributes)
            .await?;
        let body: BulkCreateResponse = serde_json::from_value(Self::read_body(response).await?)?;
        Ok(body.created)
    }

    async fn create_attribute(
        &self,
        attribute: &CustomAttribute,
    ) -> Result<CustomAttribute, ApiError> {
        let url = constants::attribute_create_endpoint(&self.base_url, &attribute.data_type);
        let response = self
            .send_json(reqwest::Method::POST, &url, &[], attribute)
            .await?;
        let created = serde_json::from_value(Self::read_body(response).await?)?;
        debug!("create_attribute - created attribute {}", attribute.name);
        Ok(created)
    }

    async fn list_values(
        &self,
        data_type: &str,
        attribute_key: &str,
    ) -> Result<Vec<AttributeValue>, ApiError> {
        let url = constants::attribute_values_endpoint(&self.base_url);
        let params = [
            ("dataType", data_type.to_string()),
            ("attributeKey", attribute_key.to_string()),
        ];
        let values = self.get_list(&url, &params).await?;
        pagination::decode_all(values)
    }

    async fn create_values(
        &self,
        data_type: &str,
        attribute_key: &str,
        values: &AttributeValues,
    ) -> Result<(), ApiError> {
        let url = constants::attribute_values_endpoint(&self.base_url);
        let params = [
            ("dataType", data_type.to_string()),
            ("attributeKey", attribute_key.to_string()),
        ];
        let response = self
            .send_json(reqwest::Method::POST, &url, &params, values)
            .await?;
        Self::read_body(response).await?;
        debug!(
            "create_values - {} values created for attribute {}",
            values.len(),
            attribute_key
        );
        Ok(())
    }

    async fn list_objects(
        &self,
        workspace: &ResolvedWorkspace,
        object_type: &str,
    ) -> Result<Vec<CatalogObject>, ApiError> {
        let url = constants::objects_endpoint(&self.base_url);
        let mut params = self.list_params(&workspace.version_id);
        params.push(("type", object_type.to_string()));

        let values = self.get_list(&url, &params).await?;
        info!(
            "list_objects - {} objects of type {} found on workspace {}",
            values.len(),
            object_type,
            workspace.name()
        );
        pagination::decode_all(values)
    }

    async fn create_object(
        &self,
        workspace: &ResolvedWorkspace,
        parent_id: Option<&str>,
        object: &CatalogObject,
    ) -> Result<String, ApiError> {
        let parent_id = parent_id.unwrap_or(workspace.id());
        let url = constants::object_create_endpoint(&self.base_url, &workspace.version_id, parent_id);
        let response = self
            .send_json(reqwest::Method::POST, &url, &[], &object.to_create_payload())
            .await?;

        if response.status().as_u16() == 400 {
            warn!("create_object - object {} was rejected", object.display_name());
        }
        let created: CreatedObject = serde_json::from_value(Self::read_body(response).await?)?;
        info!(
            "create_object - created object {} with id {}",
            object.display_name(),
            created.id
        );
        Ok(created.id)
    }
}

/// Connector authenticating over HTTP and returning [`CatalogClient`] handles
#[derive(Debug, Clone, Default)]
pub struct HttpConnector {
    config: ClientConfig,
}

impl HttpConnector {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for HttpConnector {
    async fn connect(&self, url: &str, token: &str) -> Result<Box<dyn CatalogApi>, ApiError> {
        let http_client = self.config.build_http_client()?;
        let access_token = auth::authenticate(&http_client, url, token).await?;
        Ok(Box::new(CatalogClient::with_http_client(
            url,
            access_token,
            http_client,
            self.config.page_limit,
        )))
    }
}
