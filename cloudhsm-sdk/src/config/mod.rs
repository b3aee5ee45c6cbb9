//! Client factory configuration.
//!
//! [`ClientConfig`] owns everything the transport needs to reach the API:
//! the root URL, the user agent, the extra request headers the backend
//! expects, credentials and an optional pre-built `reqwest::Client`. Pass it
//! to [`HsmClient::new`](crate::client::HsmClient::new).

mod zone;

pub use zone::Zone;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

/// Root URL used when neither a zone nor a custom URL is configured.
pub const DEFAULT_API_ROOT_URL: &str =
    "https://secure.sakura.ad.jp/cloud/zone/is1b/api/cloud/1.1/";

/// Asks the API to encode large integers as JSON numbers instead of strings.
pub const BIGINT_AS_INT_HEADER: &str = "x-sakura-bigint-as-int";

/// HTTP stack tag appended to the user agent.
///
/// reqwest sends no user agent of its own, so this is pinned by hand to the
/// `reqwest` requirement in the workspace `Cargo.toml`. Bump both together.
pub const TRANSPORT_AGENT: &str = "reqwest/0.12";

/// Errors raised while building a client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported zone: {0}")]
    UnsupportedZone(String),

    #[error("invalid api root url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Access key pair sent as HTTP basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub access_token_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// `cloudhsm-sdk/{version} ({os}/{arch}) {transport}`
pub fn default_user_agent() -> String {
    format!(
        "cloudhsm-sdk/{} ({}/{}) {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        TRANSPORT_AGENT,
    )
}

/// Headers attached to every request.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(BIGINT_AS_INT_HEADER),
        HeaderValue::from_static("1"),
    );
    headers
}

/// Builder-style configuration for [`HsmClient`](crate::client::HsmClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) api_root: Url,
    pub(crate) user_agent: String,
    pub(crate) headers: HeaderMap,
    pub(crate) http: Option<reqwest::Client>,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Configuration pointing at [`DEFAULT_API_ROOT_URL`] with no credentials.
    pub fn new() -> Self {
        Self {
            api_root: Url::parse(DEFAULT_API_ROOT_URL).expect("valid default api root"),
            user_agent: default_user_agent(),
            headers: default_headers(),
            http: None,
            credentials: None,
            timeout: None,
        }
    }

    /// Point the client at one of the known zones.
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.api_root = Url::parse(zone.api_root_url()).expect("valid zone api root");
        self
    }

    /// Point the client at an arbitrary API root (e.g. a local endpoint).
    ///
    /// A trailing `/` is appended when missing so relative endpoint paths
    /// keep the root's path prefix.
    pub fn with_api_root(mut self, api_root: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(api_root)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.api_root = url;
        Ok(self)
    }

    /// Use a pre-built `reqwest::Client` instead of building one.
    ///
    /// The timeout set with [`with_timeout`](Self::with_timeout) does not
    /// apply to a client supplied here.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn with_api_keys(
        mut self,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        });
        self
    }

    /// Per-request timeout for the internally built `reqwest::Client`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add or replace a header sent with every request.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ConfigError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ConfigError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ConfigError::InvalidHeader(format!("{name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}
