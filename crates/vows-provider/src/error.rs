use thiserror::Error;

/// Errors produced by the remote data provider client.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network-level failure before any response arrived.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Sign-in rejected by the auth service.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// An operation that needs a session ran without one.
    #[error("Not signed in")]
    NotAuthenticated,

    /// A query expected a row but found none.
    #[error("Record not found")]
    NotFound,

    /// Upload rejected before it was sent.
    #[error("Upload too large: {size} bytes (max {max})")]
    UploadTooLarge { size: usize, max: usize },

    #[error("Empty upload")]
    EmptyUpload,

    /// The provider answered 2xx but the payload did not decode.
    #[error("Invalid response payload: {0}")]
    Decode(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProviderError>;
