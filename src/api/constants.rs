//! API constants for the DataGalaxy public REST API

/// Endpoint exchanging a personal access token for a session token
pub const CREDENTIAL_PATH: &str = "credential";

/// Default page size requested on list endpoints
pub const DEFAULT_PAGE_LIMIT: u32 = 5000;

/// Standard headers and header values
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// User agent sent with every request
    pub const USER_AGENT: &str = "datagalaxy-toolbox/0.1";
}

/// Resources exposing list, bulk tree upsert and bulk delete endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Properties,
    Usages,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Properties => "properties",
            Resource::Usages => "usages",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// `GET {url}/workspaces`
pub fn workspaces_endpoint(base_url: &str) -> String {
    format!("{}/workspaces", trim(base_url))
}

/// `GET {url}/workspaces/{id}/versions`
pub fn versions_endpoint(base_url: &str, workspace_id: &str) -> String {
    format!("{}/workspaces/{}/versions", trim(base_url), workspace_id)
}

/// `GET {url}/{resource}`
pub fn resource_endpoint(base_url: &str, resource: Resource) -> String {
    format!("{}/{}", trim(base_url), resource.path())
}

/// `POST {url}/{resource}/bulktree/{versionId}`
pub fn bulktree_endpoint(base_url: &str, resource: Resource, version_id: &str) -> String {
    format!("{}/{}/bulktree/{}", trim(base_url), resource.path(), version_id)
}

/// `DELETE {url}/{resource}/bulk/{versionId}`
pub fn bulk_delete_endpoint(base_url: &str, resource: Resource, version_id: &str) -> String {
    format!("{}/{}/bulk/{}", trim(base_url), resource.path(), version_id)
}

pub fn attributes_endpoint(base_url: &str) -> String {
    format!("{}/attributes", trim(base_url))
}

pub fn attributes_bulk_endpoint(base_url: &str) -> String {
    format!("{}/attributes/bulk", trim(base_url))
}

pub fn attribute_create_endpoint(base_url: &str, data_type: &str) -> String {
    format!("{}/attributes/{}", trim(base_url), data_type)
}

pub fn attribute_values_endpoint(base_url: &str) -> String {
    format!("{}/attributes/values", trim(base_url))
}

pub fn objects_endpoint(base_url: &str) -> String {
    format!("{}/objects", trim(base_url))
}

/// `POST {url}/objects/{versionId}/{parentId}`
pub fn object_create_endpoint(base_url: &str, version_id: &str, parent_id: &str) -> String {
    format!("{}/objects/{}/{}", trim(base_url), version_id, parent_id)
}

fn trim(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}
