//! Error types exposed by the GitHub intake layer.

use thiserror::Error;

/// Errors surfaced while parsing input, loading configuration, or
/// communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// The command line did not carry exactly one pull request number.
    #[error("usage: {message}")]
    Usage {
        /// What was wrong with the supplied arguments.
        message: String,
    },

    /// The pull request number is not a positive integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The repository owner or name was blank.
    #[error("repository owner and name must not be empty")]
    MissingRepositorySegment,

    /// The API base URL could not be parsed.
    #[error("GitHub API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was blank.
    #[error("personal access token is required")]
    MissingToken,

    /// The dependency pattern could not be compiled.
    #[error("dependency pattern is invalid: {message}")]
    InvalidPattern {
        /// Compiler error from the regex engine.
        message: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl IntakeError {
    /// Returns true for failures caused by the command line itself.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}
