use log::{debug, info, warn};

use crate::api::{AttributeFormat, AttributeValues, CatalogApi, Connector, CustomAttribute};
use crate::bulk::find_duplicates;

async fn custom_attributes(api: &dyn CatalogApi) -> anyhow::Result<Vec<CustomAttribute>> {
    let attributes = api.list_attributes().await?;
    Ok(attributes.into_iter().filter(|a| a.is_custom).collect())
}

/// Drop attributes whose format cannot be recreated on the target
fn known_formats(attributes: Vec<CustomAttribute>) -> Vec<CustomAttribute> {
    let (unknown, known): (Vec<CustomAttribute>, Vec<CustomAttribute>) = attributes
        .into_iter()
        .partition(|a| a.format == AttributeFormat::Other);
    for attribute in &unknown {
        warn!(
            "copy_attributes - attribute {} has an unsupported format, skipping",
            attribute.name
        );
    }
    known
}

/// Copy custom attributes between client spaces.
///
/// Attributes whose name already exists on the target are skipped, never
/// overwritten. Simple formats are created in one bulk call; valued formats
/// are created one by one and their values copied after each creation.
/// Returns the number of simple attributes created.
pub async fn copy_attributes(
    connector: &dyn Connector,
    url_source: &str,
    url_target: &str,
    token_source: &str,
    token_target: &str,
) -> anyhow::Result<u64> {
    let source = connector.connect(url_source, token_source).await?;
    let target = connector.connect(url_target, token_target).await?;

    let source_attributes = known_formats(custom_attributes(source.as_ref()).await?);
    info!(
        "copy_attributes - {} custom attributes found on source client space {}",
        source_attributes.len(),
        source.client_space_id()
    );
    if source_attributes.is_empty() {
        warn!("copy_attributes - no custom attribute found on source client space, aborting");
        return Ok(0);
    }

    let target_attributes = custom_attributes(target.as_ref()).await?;
    info!(
        "copy_attributes - {} custom attributes found on target client space {}",
        target_attributes.len(),
        target.client_space_id()
    );

    let duplicates = find_duplicates(&source_attributes, &target_attributes);
    if !duplicates.is_empty() {
        warn!(
            "copy_attributes - {} attributes already exist on target client space: {:?}",
            duplicates.len(),
            duplicates
        );
    }

    let (with_values, without_values): (Vec<CustomAttribute>, Vec<CustomAttribute>) =
        source_attributes
            .into_iter()
            .filter(|a| !duplicates.contains(&a.name))
            .partition(|a| a.format.has_values());

    let created = target.bulk_create_attributes(&without_values).await?;
    info!(
        "copy_attributes - {} custom attributes copied to target client space",
        created
    );

    for attribute in &with_values {
        let values = source
            .list_values(&attribute.data_type, &attribute.attribute_key)
            .await?;
        let values = AttributeValues::for_format(attribute.format, values);

        let new_attribute = target.create_attribute(attribute).await?;
        target
            .create_values(&new_attribute.data_type, &new_attribute.attribute_key, &values)
            .await?;
        debug!(
            "copy_attributes - attribute {} created with {} values",
            attribute.name,
            values.len()
        );
    }
    info!(
        "copy_attributes - {} custom attributes (with values) copied to target client space",
        with_values.len()
    );

    Ok(created)
}
