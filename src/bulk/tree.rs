//! Flat object lists to nested bulk trees
//!
//! The bulk tree endpoints only accept nested payloads. Objects carry no parent
//! pointer, so the hierarchy is inferred from paths: an object's parent is the
//! input object whose path is its longest proper segment-wise prefix.

use std::collections::HashMap;

use crate::api::models::{CatalogObject, PATH_SEPARATOR};

/// Index of each object's parent within `objects`, `None` for roots.
///
/// Objects with an empty path are roots and never parents. When several
/// objects share the winning prefix path, the first one in input order is the
/// parent.
pub fn parent_indices(objects: &[CatalogObject]) -> Vec<Option<usize>> {
    let segments: Vec<Vec<&str>> = objects.iter().map(|o| o.path_segments()).collect();

    let mut first_by_path: HashMap<String, usize> = HashMap::new();
    for (index, path) in segments.iter().enumerate() {
        if !path.is_empty() {
            first_by_path.entry(path_key(path)).or_insert(index);
        }
    }

    segments
        .iter()
        .map(|path| {
            (1..path.len())
                .rev()
                .find_map(|len| first_by_path.get(&path_key(&path[..len])).copied())
        })
        .collect()
}

fn path_key(segments: &[&str]) -> String {
    segments.join(&PATH_SEPARATOR.to_string())
}

/// Nest a flat list into a forest. Roots and siblings keep their input order,
/// so a pre-order walk of the result visits every input object exactly once.
pub fn to_bulk_tree(objects: Vec<CatalogObject>) -> Vec<CatalogObject> {
    let parents = parent_indices(&objects);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); objects.len()];
    let mut roots = Vec::new();
    for (index, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(index),
            None => roots.push(index),
        }
    }

    let mut slots: Vec<Option<CatalogObject>> = objects.into_iter().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|root| assemble(root, &mut slots, &children))
        .collect()
}

fn assemble(
    index: usize,
    slots: &mut [Option<CatalogObject>],
    children: &[Vec<usize>],
) -> Option<CatalogObject> {
    let mut node = slots[index].take()?;
    let nested: Vec<CatalogObject> = children[index]
        .iter()
        .filter_map(|child| assemble(*child, slots, children))
        .collect();
    node.children.extend(nested);
    Some(node)
}

/// Pre-order walk of a forest
pub fn flatten(forest: &[CatalogObject]) -> Vec<&CatalogObject> {
    let mut visited = Vec::new();
    for node in forest {
        visit(node, &mut visited);
    }
    visited
}

fn visit<'a>(node: &'a CatalogObject, visited: &mut Vec<&'a CatalogObject>) {
    visited.push(node);
    for child in &node.children {
        visit(child, visited);
    }
}
