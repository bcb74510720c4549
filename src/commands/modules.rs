//! Copy of Strategy / Governance / Products objects.
//!
//! These modules have no bulk tree endpoint, so objects are created one at a
//! time, parents before children, each child attached to the id its parent
//! received on the target.

use log::{info, warn};

use super::{CopyRequest, connect_both};
use crate::api::{CatalogObject, Connector, NewModule};
use crate::bulk::{prune_tree, to_bulk_tree};

/// Copy every object of `module` between workspaces, returning how many were created
pub async fn copy_module(
    connector: &dyn Connector,
    module: NewModule,
    request: &CopyRequest,
) -> anyhow::Result<usize> {
    let connected = connect_both(connector, request).await?;

    let mut objects = Vec::new();
    for object_type in module.object_types() {
        let found = connected
            .source
            .list_objects(&connected.source_workspace, object_type)
            .await?;
        objects.extend(found);
    }
    info!(
        "copy_module - {} objects found in module {} of workspace {}",
        objects.len(),
        module,
        request.workspace_source
    );

    if objects.is_empty() {
        warn!(
            "copy_module - no object in module {} of source workspace {}, aborting",
            module, request.workspace_source
        );
        return Ok(0);
    }

    let forest = prune_tree(to_bulk_tree(objects), request.tag_value.as_deref());

    // Pre-order walk: a parent is always created before its children
    let mut pending: Vec<(Option<String>, &CatalogObject)> =
        forest.iter().rev().map(|root| (None, root)).collect();
    let mut created = 0;

    while let Some((parent_id, object)) = pending.pop() {
        let new_id = connected
            .target
            .create_object(&connected.target_workspace, parent_id.as_deref(), object)
            .await?;
        created += 1;

        for child in object.children.iter().rev() {
            pending.push((Some(new_id.clone()), child));
        }
    }

    info!(
        "copy_module - {} objects of module {} created on workspace {}",
        created, module, request.workspace_target
    );
    Ok(created)
}
