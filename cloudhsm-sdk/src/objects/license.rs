//! Software license resource types.
//!
//! Licenses share the `CloudHSM` envelope and list keys with partitions, see
//! [`CloudHsmEnvelope`](super::cloudhsm::CloudHsmEnvelope).

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// License tiers offered by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseServiceClass {
    #[default]
    #[serde(rename = "cloud/cloudhsm/license/l7")]
    L7,
}

impl std::fmt::Display for LicenseServiceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseServiceClass::L7 => write!(f, "cloud/cloudhsm/license/l7"),
        }
    }
}

impl std::str::FromStr for LicenseServiceClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l7" | "cloud/cloudhsm/license/l7" => Ok(LicenseServiceClass::L7),
            other => Err(format!("unknown license service class: {other}")),
        }
    }
}

/// A software license as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudHsmLicense {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified_at: OffsetDateTime,
    pub service_class: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
}

/// Request body for `POST cloudhsm/licenses/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCloudHsmLicense {
    pub service_class: LicenseServiceClass,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Request body for `PUT cloudhsm/licenses/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCloudHsmLicense {
    pub service_class: LicenseServiceClass,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}
