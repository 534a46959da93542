//! Bucket access policy documents.

use serde::{Deserialize, Serialize};

/// A bucket access policy document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketAccessPolicy {
    /// Policy language version, e.g. `2012-10-17`.
    #[serde(default)]
    pub version: String,
    /// Policy statements.
    #[serde(default, rename = "Statement")]
    pub statements: Vec<PolicyStatement>,
}

/// A single allow/deny statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    #[serde(default)]
    pub sid: String,
    /// `Allow` or `Deny`.
    pub effect: String,
    #[serde(default)]
    pub principal: Vec<String>,
    #[serde(default, rename = "Action")]
    pub actions: Vec<String>,
    #[serde(default, rename = "Resource")]
    pub resources: Vec<String>,
}
