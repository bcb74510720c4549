//! Technology codes are inherited from the top of a subtree: the bulk
//! endpoint rejects a `technologyCode` redeclared below a node that sets one.

use crate::api::models::CatalogObject;

/// If `node` declares a technology code, strip it from every descendant at
/// any depth. The node's own code is kept.
pub fn remove_technology_code(mut node: CatalogObject) -> CatalogObject {
    if node.technology_code.is_some() {
        node.children = node.children.into_iter().map(strip_subtree).collect();
    }
    node
}

fn strip_subtree(mut node: CatalogObject) -> CatalogObject {
    node.technology_code = None;
    node.children = node.children.into_iter().map(strip_subtree).collect();
    node
}

/// Apply [`remove_technology_code`] to each root that declares a code and has children
pub fn sanitize_technology_codes(forest: Vec<CatalogObject>) -> Vec<CatalogObject> {
    forest
        .into_iter()
        .map(|root| {
            if root.technology_code.is_some() && !root.children.is_empty() {
                remove_technology_code(root)
            } else {
                root
            }
        })
        .collect()
}
