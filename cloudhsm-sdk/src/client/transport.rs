//! Low-level HTTP transport shared by every operation object.

use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::TransportError;
use crate::config::{ClientConfig, ConfigError, Credentials};

/// HTTP client for the CloudHSM API.
///
/// Owns the `reqwest::Client`, the API root and the per-request decorations
/// (user agent, backend headers, basic auth). Cloning is cheap; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HsmClient {
    http: Client,
    api_root: Url,
    user_agent: String,
    headers: HeaderMap,
    credentials: Option<Credentials>,
}

impl HsmClient {
    /// Build a client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = match config.http {
            Some(http) => http,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Self {
            http,
            api_root: config.api_root,
            user_agent: config.user_agent,
            headers: config.headers,
            credentials: config.credentials,
        })
    }

    /// Client for the default zone without credentials.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::new())
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    fn request(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, TransportError> {
        let url = self.api_root.join(path)?;
        tracing::debug!(operation, %method, %url, "sending request");

        let mut request = self
            .http
            .request(method, url)
            .header(USER_AGENT, self.user_agent.as_str())
            .headers(self.headers.clone());
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(
                &credentials.access_token,
                Some(&credentials.access_token_secret),
            );
        }
        Ok(request)
    }

    async fn execute(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, TransportError> {
        let resp = request.send().await.inspect_err(|e| {
            tracing::debug!(operation, error = %e, "request failed");
        })?;

        let status = resp.status();
        tracing::debug!(operation, status = status.as_u16(), "received response");
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .inspect_err(|e| {
                    tracing::debug!(operation, error = %e, "failed to read error body");
                })
                .unwrap_or_default();
            return Err(TransportError::UnexpectedStatus { status, body });
        }
        Ok(resp)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, TransportError> {
        let request = self.request(operation, Method::GET, path)?;
        let resp = self.execute(operation, request).await?;
        parse_response(resp).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        let request = self.request(operation, Method::POST, path)?.json(body);
        let resp = self.execute(operation, request).await?;
        parse_response(resp).await
    }

    /// POST whose success response carries nothing worth decoding.
    pub(crate) async fn post_discarding<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<(), TransportError> {
        let request = self.request(operation, Method::POST, path)?.json(body);
        self.execute(operation, request).await?;
        Ok(())
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        let request = self.request(operation, Method::PUT, path)?.json(body);
        let resp = self.execute(operation, request).await?;
        parse_response(resp).await
    }

    /// DELETE; the (usually empty, 204) body is never decoded.
    pub(crate) async fn delete(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<(), TransportError> {
        let request = self.request(operation, Method::DELETE, path)?;
        self.execute(operation, request).await?;
        Ok(())
    }
}

async fn parse_response<T: DeserializeOwned>(resp: Response) -> Result<T, TransportError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(TransportError::Json)
}
