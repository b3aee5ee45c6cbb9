//! HSM partition resource types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::availability::Availability;

/// Service class every partition is created with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionServiceClass {
    #[default]
    #[serde(rename = "cloud/cloudhsm/partition")]
    Partition,
}

/// An HSM partition as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudHsm {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified_at: OffsetDateTime,
    pub availability: Availability,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
    pub service_class: String,
    #[serde(default)]
    pub ipv4_network_address: String,
    #[serde(default)]
    pub ipv4_prefix_length: u8,
}

/// Request body for `POST cloudhsm/cloudhsms/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCloudHsm {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub availability: Availability,
    pub service_class: PartitionServiceClass,
    pub ipv4_network_address: String,
    pub ipv4_prefix_length: u8,
}

/// Request body for `PUT cloudhsm/cloudhsms/{id}/`.
///
/// Every field is always transmitted; the API replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCloudHsm {
    pub service_class: PartitionServiceClass,
    pub availability: Availability,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub ipv4_network_address: String,
    pub ipv4_prefix_length: u8,
}

/// `{"CloudHSM": ...}` envelope shared by partitions and licenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudHsmEnvelope<T> {
    #[serde(rename = "CloudHSM")]
    pub cloud_hsm: T,
}

/// Paginated list envelope shared by partitions and licenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaginatedCloudHsmList<T> {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(rename = "CloudHSMs", default = "Vec::new")]
    pub cloud_hsms: Vec<T>,
}
