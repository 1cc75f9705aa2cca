use http::StatusCode;
use thiserror::Error;

/// Failures surfaced to callers of [`crate::SireneClient`].
///
/// Per-record parse failures are not represented here: the parser logs
/// and drops the offending item instead of failing the batch.
#[derive(Debug, Error)]
pub enum Error {
    /// The request did not complete within the 5-second deadline.
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    /// Connection-level failure (DNS, refused, reset, TLS).
    #[error("transport error")]
    Transport(#[source] reqwest::Error),

    /// The search endpoint answered with a non-2xx status.
    #[error("search request failed with status {0}")]
    Status(StatusCode),

    /// The token endpoint answered with a non-2xx status.
    #[error("token request failed with status {0}")]
    Auth(StatusCode),

    /// The token endpoint answered 2xx but the body carried no
    /// string `access_token` field.
    #[error("token response had no access_token")]
    MalformedToken,
}

impl Error {
    /// Only timeouts and transport failures are worth another attempt;
    /// a status the server already committed to will not change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Timeout(_) | Error::Transport(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err)
        } else {
            Error::Transport(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
