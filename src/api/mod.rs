//! DataGalaxy REST API module
//!
//! Typed records for the API contract, an authenticated HTTP client, cursor
//! pagination, and the [`CatalogApi`]/[`Connector`] seams the commands are
//! written against.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod pagination;

pub use catalog::{CatalogApi, Connector};
pub use client::{CatalogClient, HttpConnector};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use constants::Resource;
pub use error::ApiError;
pub use models::{
    AccessToken, AttributeFormat, AttributeValue, AttributeValues, BulkResult, CatalogObject,
    CustomAttribute, NewModule, ResolvedWorkspace, Version, Workspace,
};
pub use pagination::{Page, PageSource, collect_pages};
