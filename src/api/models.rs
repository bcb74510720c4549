//! Typed records for the catalog API contract

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::error::ApiError;

/// Attribute holding tag membership on catalog objects
pub const TAGS_ATTRIBUTE: &str = "tags";

/// Separator between segments of an object path
pub const PATH_SEPARATOR: char = '\\';

/// Session credential obtained once per (url, token) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub client_space_id: String,
}

/// Top-level container of glossary, usage and module objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_versioning_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

impl Workspace {
    pub fn default_version(&self) -> Option<&str> {
        self.default_version_id
            .as_deref()
            .or(self.version_id.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub version_id: String,
    pub version_name: String,
}

/// A workspace pinned to the version every downstream call runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWorkspace {
    pub workspace: Workspace,
    pub version_id: String,
}

impl ResolvedWorkspace {
    /// Pin a workspace to its default version
    pub fn with_default_version(workspace: Workspace) -> Result<Self, ApiError> {
        let version_id = workspace
            .default_version()
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::InvalidResponse(format!(
                    "workspace {} has no default version",
                    workspace.name
                ))
            })?;
        Ok(Self {
            workspace,
            version_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.workspace.name
    }

    pub fn id(&self) -> &str {
        &self.workspace.id
    }

    /// Version id for operations that only work on non-versioned workspaces
    pub fn require_unversioned(&self) -> Result<&str, ApiError> {
        if self.workspace.is_versioning_enabled {
            return Err(ApiError::versioning_unsupported());
        }
        Ok(&self.version_id)
    }
}

/// Catalog entity (glossary property, usage, module object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogObject {
    pub id: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology_code: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CatalogObject>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogObject {
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            name: None,
            object_type: None,
            technology_code: None,
            attributes: Map::new(),
            children: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_technology_code(mut self, code: impl Into<String>) -> Self {
        self.technology_code = Some(code.into());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.attributes.insert(
            TAGS_ATTRIBUTE.to_string(),
            Value::Array(tags.iter().map(|t| Value::from(*t)).collect()),
        );
        self
    }

    pub fn with_children(mut self, children: Vec<CatalogObject>) -> Self {
        self.children = children;
        self
    }

    /// Non-empty path segments, root first
    pub fn path_segments(&self) -> Vec<&str> {
        self.path
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Whether the tag attribute equals (or, for lists, contains) `tag_value`
    pub fn has_tag(&self, tag_value: &str) -> bool {
        match self.attributes.get(TAGS_ATTRIBUTE) {
            Some(Value::String(tag)) => tag == tag_value,
            Some(Value::Array(tags)) => tags.iter().any(|t| t.as_str() == Some(tag_value)),
            _ => false,
        }
    }

    /// Name used when creating the object elsewhere; falls back to the last path segment
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or_else(|| self.path_segments().last().copied())
            .unwrap_or(&self.id)
    }

    /// Number of nodes in this subtree, self included
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(|c| c.subtree_len()).sum::<usize>()
    }

    /// Body for single-object creation: source identity, location and children stripped
    pub fn to_create_payload(&self) -> Value {
        let mut payload = self.extra.clone();
        payload.insert("name".to_string(), Value::from(self.display_name()));
        if let Some(object_type) = &self.object_type {
            payload.insert("type".to_string(), Value::from(object_type.as_str()));
        }
        if let Some(code) = &self.technology_code {
            payload.insert("technologyCode".to_string(), Value::from(code.as_str()));
        }
        for (key, value) in &self.attributes {
            payload.insert(key.clone(), value.clone());
        }
        Value::Object(payload)
    }
}

/// Counts returned by a bulk tree upsert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkResult {
    pub total: u64,
    pub created: u64,
    pub updated: u64,
    pub unchanged: u64,
    pub deleted: u64,
}

impl fmt::Display for BulkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total: {} created, {} updated, {} unchanged, {} deleted",
            self.total, self.created, self.updated, self.unchanged, self.deleted
        )
    }
}

/// Attribute formats known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeFormat {
    Text,
    MultiLineText,
    Html,
    Number,
    Date,
    DateTime,
    Time,
    Boolean,
    Url,
    Person,
    Entity,
    Hierarchy,
    ValueList,
    MultiValueList,
    ManagedTag,
    /// Any format this crate does not know about
    #[serde(other)]
    Other,
}

impl AttributeFormat {
    /// Formats carrying a value set that has to be copied in a second call
    pub fn has_values(&self) -> bool {
        matches!(
            self,
            AttributeFormat::ValueList
                | AttributeFormat::ManagedTag
                | AttributeFormat::Hierarchy
                | AttributeFormat::MultiValueList
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttribute {
    pub name: String,
    pub format: AttributeFormat,
    pub data_type: String,
    pub attribute_key: String,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub key: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Values payload for `POST attributes/values`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValues {
    Keys(Vec<String>),
    Entries(Vec<AttributeValue>),
}

impl AttributeValues {
    /// `ValueList` takes bare keys, other valued formats take full entries
    pub fn for_format(format: AttributeFormat, values: Vec<AttributeValue>) -> Self {
        match format {
            AttributeFormat::ValueList => {
                AttributeValues::Keys(values.into_iter().map(|v| v.key).collect())
            }
            _ => AttributeValues::Entries(values),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AttributeValues::Keys(keys) => keys.len(),
            AttributeValues::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Modules whose objects live under the generic `objects` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewModule {
    Strategy,
    Governance,
    Products,
}

impl NewModule {
    pub fn object_types(&self) -> &'static [&'static str] {
        match self {
            NewModule::Strategy => &["Objective", "Initiative", "UseCase"],
            NewModule::Governance => &[
                "PolicyGroup",
                "Policy",
                "RuleGroup",
                "Rule",
                "MonitorGroup",
                "Monitor",
            ],
            NewModule::Products => &["DataProduct", "AiProduct"],
        }
    }
}

impl fmt::Display for NewModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NewModule::Strategy => "Strategy",
            NewModule::Governance => "Governance",
            NewModule::Products => "Products",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_object_from_json() {
        let object: CatalogObject = serde_json::from_value(json!({
            "id": "u1",
            "path": "\\Sales\\Reports",
            "name": "Reports",
            "type": "Report",
            "technologyCode": "powerbi",
            "attributes": {"tags": ["gdpr"], "owner": "jane"},
            "summary": "Monthly"
        }))
        .unwrap();

        assert_eq!(object.path_segments(), vec!["Sales", "Reports"]);
        assert_eq!(object.object_type.as_deref(), Some("Report"));
        assert_eq!(object.technology_code.as_deref(), Some("powerbi"));
        assert!(object.has_tag("gdpr"));
        assert!(!object.has_tag("GDPR"));
        assert_eq!(object.extra.get("summary"), Some(&json!("Monthly")));
        assert!(object.children.is_empty());
    }

    #[test]
    fn test_catalog_object_requires_id_and_path() {
        let missing_path = serde_json::from_value::<CatalogObject>(json!({"id": "u1"}));
        assert!(missing_path.is_err());
    }

    #[test]
    fn test_single_string_tag() {
        let mut object = CatalogObject::new("p1", "\\A");
        object
            .attributes
            .insert(TAGS_ATTRIBUTE.to_string(), json!("finance"));
        assert!(object.has_tag("finance"));
        assert!(!object.has_tag("fin"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let object = CatalogObject::new("p1", "\\A");
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json, json!({"id": "p1", "path": "\\A"}));
    }

    #[test]
    fn test_create_payload() {
        let mut object = CatalogObject::new("o1", "\\Goals\\Grow").with_tags(&["q1"]);
        object.object_type = Some("Objective".to_string());
        let payload = object.to_create_payload();

        assert_eq!(payload["name"], json!("Grow"));
        assert_eq!(payload["type"], json!("Objective"));
        assert_eq!(payload["tags"], json!(["q1"]));
        assert!(payload.get("id").is_none());
        assert!(payload.get("path").is_none());
    }

    #[test]
    fn test_workspace_default_version() {
        let workspace: Workspace = serde_json::from_value(json!({
            "id": "w1",
            "name": "Sales",
            "isVersioningEnabled": false,
            "defaultVersionId": "v1"
        }))
        .unwrap();
        let resolved = ResolvedWorkspace::with_default_version(workspace).unwrap();
        assert_eq!(resolved.version_id, "v1");
        assert_eq!(resolved.require_unversioned().unwrap(), "v1");
    }

    #[test]
    fn test_versioned_workspace_is_rejected() {
        let workspace = Workspace {
            id: "w1".to_string(),
            name: "Sales".to_string(),
            is_versioning_enabled: true,
            default_version_id: None,
            version_id: Some("v9".to_string()),
        };
        let resolved = ResolvedWorkspace::with_default_version(workspace).unwrap();
        assert!(matches!(
            resolved.require_unversioned(),
            Err(ApiError::UnsupportedConfiguration(_))
        ));
    }

    #[test]
    fn test_value_list_sends_keys() {
        let values = vec![
            AttributeValue { key: "low".to_string(), extra: Map::new() },
            AttributeValue { key: "high".to_string(), extra: Map::new() },
        ];
        let payload = AttributeValues::for_format(AttributeFormat::ValueList, values.clone());
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!(["low", "high"]));

        let payload = AttributeValues::for_format(AttributeFormat::ManagedTag, values);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!([{"key": "low"}, {"key": "high"}])
        );
    }

    #[test]
    fn test_valued_formats() {
        assert!(AttributeFormat::ValueList.has_values());
        assert!(AttributeFormat::MultiValueList.has_values());
        assert!(AttributeFormat::Hierarchy.has_values());
        assert!(AttributeFormat::ManagedTag.has_values());
        assert!(!AttributeFormat::Text.has_values());
        assert!(!AttributeFormat::Number.has_values());
    }

    #[test]
    fn test_unknown_format_is_other() {
        let attribute: CustomAttribute = serde_json::from_value(json!({
            "name": "Summary",
            "format": "RichText",
            "dataType": "common",
            "attributeKey": "summary",
            "isCustom": true
        }))
        .unwrap();
        assert_eq!(attribute.format, AttributeFormat::Other);
        assert!(!attribute.format.has_values());
    }
}
