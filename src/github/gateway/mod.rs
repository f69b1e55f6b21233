//! Gateways for loading pull requests through Octocrab.
//!
//! The trait-based design lets tests substitute a mock for the GitHub API
//! while the Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod octocrab_gateway;

pub use octocrab_gateway::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{PullRequestComment, PullRequestMetadata};

/// Gateway that can load pull request data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the pull request metadata.
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestMetadata, IntakeError>;

    /// Fetch all issue comments for the pull request in thread order.
    async fn pull_request_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<PullRequestComment>, IntakeError>;
}
