use serde::{Deserialize, Serialize};

/// Provisioning state of a partition or client certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Precreate,
    Uploading,
    Transferring,
    Migrating,
    Failed,
    Unavailable,
    /// A state this library does not know about yet.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Precreate => write!(f, "precreate"),
            Availability::Uploading => write!(f, "uploading"),
            Availability::Transferring => write!(f, "transferring"),
            Availability::Migrating => write!(f, "migrating"),
            Availability::Failed => write!(f, "failed"),
            Availability::Unavailable => write!(f, "unavailable"),
            Availability::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_decodes() {
        let a: Availability = serde_json::from_str("\"discontinued\"").unwrap();
        assert_eq!(a, Availability::Unknown);

        let a: Availability = serde_json::from_str("\"precreate\"").unwrap();
        assert_eq!(a, Availability::Precreate);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"precreate\"");
    }
}
