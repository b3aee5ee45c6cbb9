//! Error types and the status classification shared by every operation.

use reqwest::StatusCode;

use crate::objects::Availability;

/// Failures produced by [`HsmClient`](super::HsmClient) before any status
/// classification happens.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API root could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl TransportError {
    /// The HTTP status the server answered with, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// What a failed call means to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The target resource does not exist (404).
    NotFound,
    /// The request payload was rejected (422).
    InvalidParameter,
    /// Any other non-success status.
    Internal,
    /// No status at all: connection, timeout or decoding failure.
    Transport,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::InvalidParameter => write!(f, "invalid parameter"),
            ErrorKind::Internal => write!(f, "internal server error"),
            ErrorKind::Transport => write!(f, "transport error"),
        }
    }
}

/// A failed API call, tagged with the operation that issued it.
#[derive(Debug, thiserror::Error)]
#[error("API Error: {operation} {status}: {kind}: {source}")]
pub struct ApiError {
    operation: &'static str,
    /// `0` when the failure carried no HTTP status.
    status: u16,
    kind: ErrorKind,
    #[source]
    source: TransportError,
}

impl ApiError {
    pub fn new(operation: &'static str, status: u16, kind: ErrorKind, source: TransportError) -> Self {
        Self {
            operation,
            status,
            kind,
            source,
        }
    }

    /// Operation name, e.g. `CloudHSM.Read`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// HTTP status code, or `0` if the request never got one.
    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn transport(&self) -> &TransportError {
        &self.source
    }
}

/// One `(status, meaning)` mapping applied by a call site.
pub type StatusRule = (StatusCode, ErrorKind);

/// Rules for calls that only have the generic error path.
pub const GENERIC: &[StatusRule] = &[];

/// Rules for reads, deletes and parent-scoped lists.
pub const NOT_FOUND: &[StatusRule] = &[(StatusCode::NOT_FOUND, ErrorKind::NotFound)];

/// Rules for creates and updates.
pub const UNPROCESSABLE: &[StatusRule] =
    &[(StatusCode::UNPROCESSABLE_ENTITY, ErrorKind::InvalidParameter)];

/// Translate a transport failure into an [`ApiError`].
///
/// The first rule matching the response status decides the kind. Statuses
/// no rule covers become [`ErrorKind::Internal`]; failures without a status
/// become [`ErrorKind::Transport`] with status `0`.
pub fn classify(operation: &'static str, rules: &[StatusRule], err: TransportError) -> ApiError {
    let Some(status) = err.status() else {
        return ApiError::new(operation, 0, ErrorKind::Transport, err);
    };
    let kind = rules
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, kind)| *kind)
        .unwrap_or(ErrorKind::Internal);
    ApiError::new(operation, status.as_u16(), kind, err)
}

/// Errors returned by the operation objects.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parent partition is not `available`, so no certificate or peer
    /// operation can be built for it.
    #[error("{operation}: CloudHSM unavailable (availability: {availability})")]
    Unavailable {
        operation: &'static str,
        availability: Availability,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn operation(&self) -> &'static str {
        match self {
            Error::Unavailable { operation, .. } => *operation,
            Error::Api(e) => e.operation(),
        }
    }

    /// `None` for [`Error::Unavailable`], which never reached the API.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Api(e) => Some(e.kind()),
            Error::Unavailable { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }

    pub fn is_invalid_parameter(&self) -> bool {
        self.kind() == Some(ErrorKind::InvalidParameter)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::Unavailable { .. })
    }
}
