use std::collections::{BTreeSet, HashSet};

use crate::api::models::CustomAttribute;

/// Attribute names present on both sides (exact, case-sensitive match)
pub fn find_duplicates(source: &[CustomAttribute], target: &[CustomAttribute]) -> BTreeSet<String> {
    let target_names: HashSet<&str> = target.iter().map(|a| a.name.as_str()).collect();
    source
        .iter()
        .filter(|a| target_names.contains(a.name.as_str()))
        .map(|a| a.name.clone())
        .collect()
}
