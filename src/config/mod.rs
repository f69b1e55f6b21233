//! Application configuration loaded from CLI flags, environment, and files.
//!
//! Values are merged with ortho-config's layered approach, lowest to highest
//! precedence:
//!
//! 1. **Defaults** – the fixed repository and `depends:` pattern below
//! 2. **Configuration file** – `.downstream-prs.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `DOWNSTREAM_PRS_*`, plus the `GH_TOKEN` and
//!    `GITHUB_TOKEN` fallbacks for the token
//! 4. **Command-line flags** – `--token`, `--owner`, `--repo`, `--api-base`,
//!    `--marker`, `--url-prefix`
//!
//! The pull request number is positional and is split off the argument list
//! before ortho-config parses the flags.
//!
//! ```toml
//! owner = "GoogleCloudPlatform"
//! repo = "magic-modules"
//! api_base = "https://api.github.com"
//! marker = "depends: "
//! url_prefix = "https://github.com/"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::dependencies::{DEFAULT_MARKER, DEFAULT_URL_PREFIX, DependencyPattern};
use crate::github::{
    IntakeError, PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName,
    RepositoryOwner,
};

/// Owner of the repository whose pull requests are scanned by default.
pub const DEFAULT_OWNER: &str = "GoogleCloudPlatform";

/// Repository whose pull requests are scanned by default.
pub const DEFAULT_REPOSITORY: &str = "magic-modules";

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Environment variables consulted, in order, when no token is configured.
pub const TOKEN_FALLBACK_VARIABLES: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Configuration for a dependency scan.
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "DOWNSTREAM_PRS",
    discovery(
        dotfile_name = ".downstream-prs.toml",
        config_file_name = "downstream-prs.toml",
        app_name = "downstream-prs"
    )
)]
pub struct DownstreamConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `DOWNSTREAM_PRS_TOKEN`, `GH_TOKEN`, or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository owner, `GoogleCloudPlatform` unless overridden.
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name, `magic-modules` unless overridden.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// GitHub API base URL; set this for GitHub Enterprise
    /// (`https://<host>/api/v3`).
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Text that starts a dependency line, `depends: ` unless overridden.
    #[ortho_config()]
    pub marker: Option<String>,

    /// Prefix a dependency URL must carry, `https://github.com/` unless
    /// overridden.
    #[ortho_config()]
    pub url_prefix: Option<String>,
}

impl DownstreamConfig {
    /// Resolves the token from configuration, then `GH_TOKEN`, then
    /// `GITHUB_TOKEN`.
    ///
    /// Blank values are skipped. `None` means requests go out
    /// unauthenticated.
    #[must_use]
    pub fn resolve_token(&self) -> Option<PersonalAccessToken> {
        self.token
            .clone()
            .into_iter()
            .chain(
                TOKEN_FALLBACK_VARIABLES
                    .iter()
                    .filter_map(|name| env::var(name).ok()),
            )
            .find_map(|value| PersonalAccessToken::new(value).ok())
    }

    /// Repository owner with the default applied.
    #[must_use]
    pub fn repository_owner(&self) -> &str {
        self.owner.as_deref().unwrap_or(DEFAULT_OWNER)
    }

    /// Repository name with the default applied.
    #[must_use]
    pub fn repository_name(&self) -> &str {
        self.repo.as_deref().unwrap_or(DEFAULT_REPOSITORY)
    }

    /// API base URL with the default applied.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Dependency marker with the default applied.
    #[must_use]
    pub fn dependency_marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }

    /// Dependency URL prefix with the default applied.
    #[must_use]
    pub fn dependency_url_prefix(&self) -> &str {
        self.url_prefix.as_deref().unwrap_or(DEFAULT_URL_PREFIX)
    }

    /// Builds the locator for pull request `number` in the configured
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidPullRequestNumber`] for zero,
    /// [`IntakeError::MissingRepositorySegment`] for a blank owner or name,
    /// and [`IntakeError::InvalidUrl`] for an unusable API base.
    pub fn locator(&self, number: u64) -> Result<PullRequestLocator, IntakeError> {
        PullRequestLocator::new(
            self.api_base_url(),
            RepositoryOwner::new(self.repository_owner())?,
            RepositoryName::new(self.repository_name())?,
            PullRequestNumber::new(number)?,
        )
    }

    /// Compiles the configured dependency pattern.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidPattern`] when compilation fails.
    pub fn dependency_pattern(&self) -> Result<DependencyPattern, IntakeError> {
        DependencyPattern::new(self.dependency_marker(), self.dependency_url_prefix())
    }
}
