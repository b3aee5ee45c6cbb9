//! Fixtures and a mock-server-backed client for unit tests.

use serde_json::{Value, json};
use wiremock::MockServer;

use super::HsmClient;
use crate::config::ClientConfig;
use crate::objects::CloudHsm;

/// Start a mock API and a client pointed at it with test credentials.
pub(crate) async fn mock_client() -> (MockServer, HsmClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::new()
        .with_api_root(&server.uri())
        .unwrap()
        .with_api_keys("test-token", "test-secret");
    let client = HsmClient::new(config).unwrap();
    (server, client)
}

/// Error body in the shape the API returns.
pub(crate) fn error_body(message: &str) -> Value {
    json!({ "is_ok": false, "error_msg": message })
}

pub(crate) fn cloudhsm_json(id: &str, availability: &str) -> Value {
    json!({
        "ID": id,
        "CreatedAt": "2025-04-01T10:00:00+09:00",
        "ModifiedAt": "2025-04-02T12:30:00+09:00",
        "Availability": availability,
        "Name": "Test HSM",
        "Description": "This is a test HSM",
        "Tags": ["tag1", "tag2"],
        "ServiceClass": "cloud/cloudhsm/partition",
        "Ipv4NetworkAddress": "172.16.0.0",
        "Ipv4PrefixLength": 28,
    })
}

pub(crate) fn cloudhsm(id: &str, availability: &str) -> CloudHsm {
    serde_json::from_value(cloudhsm_json(id, availability)).unwrap()
}

pub(crate) fn client_json(id: &str, name: &str) -> Value {
    json!({
        "ID": id,
        "CreatedAt": "2025-04-01T10:00:00+09:00",
        "ModifiedAt": "2025-04-01T10:00:00+09:00",
        "Availability": "available",
        "Name": name,
        "Certificate": "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n",
    })
}

pub(crate) fn license_json(id: &str) -> Value {
    json!({
        "ID": id,
        "CreatedAt": "2025-04-01T10:00:00+09:00",
        "ModifiedAt": "2025-04-01T10:00:00+09:00",
        "ServiceClass": "cloud/cloudhsm/license/l7",
        "Name": "Test License",
        "Description": "This is a test license",
        "Tags": ["tag1", "tag2"],
    })
}
