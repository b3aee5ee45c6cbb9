//! TOML file configuration structures.
//!
//! These structs directly map to the `cloudhsm.toml` file format. Every
//! section is optional.

use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

/// API endpoint section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Zone identifier (`is1b`, `tk1a`).
    pub zone: Option<String>,
    /// Explicit API root; wins over `zone`.
    pub api_root: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Access key pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
}
