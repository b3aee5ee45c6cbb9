//! Peer (VPN router) resource types.

use serde::{Deserialize, Serialize};

/// A VPN router peered with a partition.
///
/// The secret key is write-only and never comes back from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudHsmPeer {
    #[serde(rename = "ID")]
    pub id: String,
}

/// Request body for `POST .../peers/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCloudHsmPeer {
    /// Router identifier chosen by the caller; becomes the peer ID.
    #[serde(rename = "ID")]
    pub id: String,
    pub secret_key: String,
}

/// `{"Peer": ...}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerEnvelope<T> {
    #[serde(rename = "Peer")]
    pub peer: T,
}

/// List of peers. Not paginated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerList {
    #[serde(rename = "Peers", default)]
    pub peers: Vec<CloudHsmPeer>,
}
