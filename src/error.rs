use reqwest::StatusCode;

/// A convenient result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the HTTP layer.
///
/// Both catalog sources and record collections report through this type;
/// how an error surfaces (retryable state vs. silent skip) is decided by
/// the caller, not here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never completed, or the body could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
}

impl Error {
    pub(crate) fn status(url: impl Into<String>, status: StatusCode) -> Self {
        Error::Status {
            url: url.into(),
            status,
        }
    }
}
