//! Client certificate resource types.
//!
//! A client certificate authorises mutual-TLS access to one partition. The
//! API calls these "clients", hence the `Client` envelope key.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::availability::Availability;

/// A client certificate registered against a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudHsmClient {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified_at: OffsetDateTime,
    pub availability: Availability,
    pub name: String,
    /// PEM-encoded certificate.
    pub certificate: String,
}

/// Request body for `POST .../clients/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCloudHsmClient {
    pub name: String,
    pub certificate: String,
    pub availability: Availability,
}

/// Request body for `PUT .../clients/{id}/`.
///
/// The certificate itself is immutable; only the name can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCloudHsmClient {
    pub name: String,
    pub availability: Availability,
}

/// `{"Client": ...}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEnvelope<T> {
    #[serde(rename = "Client")]
    pub client: T,
}

/// Paginated list of client certificates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaginatedClientList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub clients: Vec<CloudHsmClient>,
}
