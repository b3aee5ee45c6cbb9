//! Wire types for the CloudHSM API.
//!
//! Response types derive both `Serialize` and `Deserialize` so they can be
//! re-emitted as JSON by tools; request types are serialize-only.

pub mod availability;
pub mod certificate;
pub mod cloudhsm;
pub mod license;
pub mod peer;

pub use availability::Availability;
pub use certificate::CloudHsmClient;
pub use cloudhsm::CloudHsm;
pub use license::{CloudHsmLicense, LicenseServiceClass};
pub use peer::CloudHsmPeer;

/// Decode `null` as the type's default. The API sends `"Tags": null` for
/// untagged resources.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
