//! Tree reconciliation applied to source objects before a bulk upsert
//!
//! Flat list → [`to_bulk_tree`] → [`prune_tree`] (optional) →
//! [`sanitize_technology_codes`] → bulk upsert payload.

pub mod duplicates;
pub mod prune;
pub mod technology;
pub mod tree;

pub use duplicates::find_duplicates;
pub use prune::prune_tree;
pub use technology::{remove_technology_code, sanitize_technology_codes};
pub use tree::{flatten, to_bulk_tree};

use crate::api::models::CatalogObject;

/// Build the bulk upsert payload for a flat list of source objects
pub fn prepare_bulk_tree(objects: Vec<CatalogObject>, tag_value: Option<&str>) -> Vec<CatalogObject> {
    let forest = to_bulk_tree(objects);
    let forest = prune_tree(forest, tag_value);
    sanitize_technology_codes(forest)
}
