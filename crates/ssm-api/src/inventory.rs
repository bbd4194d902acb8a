//! Managed-instance inventory listing

use serde::{Deserialize, Serialize};

/// One managed instance as reported by the inventory listing
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// e.g. `Linux`, `Windows`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<String>,
    /// e.g. `Online`, `Offline`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_status: Option<String>,
    /// Whether the instance runs the latest agent version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_latest_version: Option<bool>,
}

/// Attribute filter: `key` names the attribute, `values` are the accepted matches
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceInformationStringFilter {
    pub key: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl InstanceInformationStringFilter {
    pub fn new(
        key: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceInformationInput {
    /// All filters must match for an instance to be listed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<InstanceInformationStringFilter>,
    /// Continuation token from the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeInstanceInformationInput {
    pub fn with_filter(mut self, filter: InstanceInformationStringFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Continuation token, treating an empty string as absent
    pub fn continuation_token(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|token| !token.is_empty())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceInformationOutput {
    #[serde(default)]
    pub instance_information_list: Vec<InstanceInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeInstanceInformationOutput {
    /// Whether another page follows this one
    pub fn has_more_pages(&self) -> bool {
        self.next_token.as_deref().is_some_and(|token| !token.is_empty())
    }
}
