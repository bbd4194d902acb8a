//! Inventory filter matching
//!
//! Matching is deliberately coarse: an instance is rendered in its wire form
//! (`{"InstanceId":"i-23456",...,"PingStatus":"Offline"}`) and a filter
//! matches when any of its values occurs anywhere in that dump. Filter keys
//! are not consulted, so a value naming an attribute matches every record
//! that carries it. This works because fixture identifiers are short and
//! never contain one another.

use ssm_api::SsmError;
use ssm_api::inventory::{InstanceInformation, InstanceInformationStringFilter};

/// Render `instance` with its PascalCase wire names
pub fn wire_dump(instance: &InstanceInformation) -> Result<String, SsmError> {
    serde_json::to_string(instance)
        .map_err(|e| SsmError::Unclassified(format!("failed to render instance record: {e}")))
}

/// Whether `instance` satisfies a single filter entry
pub fn instance_matches_filter(
    instance: &InstanceInformation,
    filter: &InstanceInformationStringFilter,
) -> Result<bool, SsmError> {
    Ok(dump_matches(&wire_dump(instance)?, filter))
}

/// Instances that satisfy every filter, in their original order
pub fn filter_instances(
    instances: &[InstanceInformation],
    filters: &[InstanceInformationStringFilter],
) -> Result<Vec<InstanceInformation>, SsmError> {
    if filters.is_empty() {
        return Ok(instances.to_vec());
    }

    let mut matched = Vec::new();
    for instance in instances {
        let dump = wire_dump(instance)?;
        if filters.iter().all(|filter| dump_matches(&dump, filter)) {
            matched.push(instance.clone());
        }
    }
    Ok(matched)
}

fn dump_matches(dump: &str, filter: &InstanceInformationStringFilter) -> bool {
    filter.values.iter().any(|value| dump.contains(value.as_str()))
}
