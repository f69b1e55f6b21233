//! Identity wrappers for the pull request whose comments are scanned.

use url::Url;

use super::error::IntakeError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingRepositorySegment` for a blank value.
    pub fn new(value: &str) -> Result<Self, IntakeError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IntakeError::MissingRepositorySegment);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingRepositorySegment` for a blank value.
    pub fn new(value: &str) -> Result<Self, IntakeError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IntakeError::MissingRepositorySegment);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Wraps a positive pull request number.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidPullRequestNumber` for zero.
    pub const fn new(value: u64) -> Result<Self, IntakeError> {
        if value == 0 {
            return Err(IntakeError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, IntakeError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IntakeError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// A pull request within a fixed repository, plus the API base used to
/// reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Builds a locator from its parts.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when `api_base` cannot be parsed.
    pub fn new(
        api_base: &str,
        owner: RepositoryOwner,
        repository: RepositoryName,
        number: PullRequestNumber,
    ) -> Result<Self, IntakeError> {
        let parsed =
            Url::parse(api_base).map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(IntakeError::InvalidUrl(format!(
                "{api_base} cannot be used as a base URL"
            )));
        }

        Ok(Self {
            api_base: parsed,
            owner,
            repository,
            number,
        })
    }

    /// API base URL requests are sent to.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }

    pub(crate) fn comments_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}/comments",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}
