use crate::api::models::CatalogObject;

/// Keep only the nodes tagged `tag_value` plus the ancestors needed to reach
/// them. A kept node retains only its kept descendants. `None` disables
/// pruning.
pub fn prune_tree(forest: Vec<CatalogObject>, tag_value: Option<&str>) -> Vec<CatalogObject> {
    match tag_value {
        Some(tag_value) => forest
            .into_iter()
            .filter_map(|node| prune_node(node, tag_value))
            .collect(),
        None => forest,
    }
}

fn prune_node(mut node: CatalogObject, tag_value: &str) -> Option<CatalogObject> {
    let children = std::mem::take(&mut node.children);
    node.children = children
        .into_iter()
        .filter_map(|child| prune_node(child, tag_value))
        .collect();

    if node.has_tag(tag_value) || !node.children.is_empty() {
        Some(node)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(id: &str, tags: &[&str]) -> CatalogObject {
        CatalogObject::new(id, format!("\\{}", id)).with_tags(tags)
    }

    fn plain(id: &str) -> CatalogObject {
        CatalogObject::new(id, format!("\\{}", id))
    }

    fn sample_forest() -> Vec<CatalogObject> {
        vec![
            plain("root1").with_children(vec![
                plain("a").with_children(vec![tagged("a1", &["gdpr"]), plain("a2")]),
                plain("b"),
            ]),
            tagged("root2", &["gdpr"]).with_children(vec![plain("c"), tagged("d", &["other"])]),
            plain("root3").with_children(vec![plain("e")]),
        ]
    }

    fn ids(forest: &[CatalogObject]) -> Vec<&str> {
        forest.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_no_tag_is_identity() {
        let forest = sample_forest();
        assert_eq!(prune_tree(forest.clone(), None), forest);
    }

    #[test]
    fn test_keeps_ancestors_of_matching_descendants() {
        let pruned = prune_tree(sample_forest(), Some("gdpr"));

        assert_eq!(ids(&pruned), vec!["root1", "root2"]);
        assert_eq!(ids(&pruned[0].children), vec!["a"]);
        assert_eq!(ids(&pruned[0].children[0].children), vec!["a1"]);
    }

    #[test]
    fn test_matching_node_drops_non_matching_children() {
        let pruned = prune_tree(sample_forest(), Some("gdpr"));
        assert!(pruned[1].children.is_empty());
    }

    #[test]
    fn test_match_is_exact() {
        assert!(prune_tree(sample_forest(), Some("GDPR")).is_empty());
        assert!(prune_tree(sample_forest(), Some("gdp")).is_empty());
    }

    #[test]
    fn test_pruning_is_idempotent() {
        for tag in ["gdpr", "other", "missing"] {
            let once = prune_tree(sample_forest(), Some(tag));
            let twice = prune_tree(once.clone(), Some(tag));
            assert_eq!(once, twice, "tag {}", tag);
        }
    }

    #[test]
    fn test_deep_match_keeps_whole_chain() {
        let forest = vec![plain("x").with_children(vec![
            plain("y").with_children(vec![plain("z").with_children(vec![tagged("t", &["deep"])])]),
        ])];

        let pruned = prune_tree(forest, Some("deep"));

        assert_eq!(ids(&pruned), vec!["x"]);
        assert_eq!(ids(&pruned[0].children[0].children[0].children), vec!["t"]);
    }
}
