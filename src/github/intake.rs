//! High-level intake facade used by the dependency extractor.

use super::error::IntakeError;
use super::gateway::PullRequestGateway;
use super::locator::PullRequestLocator;
use super::models::{PullRequestComment, PullRequestDetails, PullRequestMetadata};

/// Resolves a pull request and then loads its comments using a gateway.
pub struct PullRequestIntake<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestIntake<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load metadata and comments for the target pull request.
    ///
    /// Comments are only requested once the pull request itself resolves.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, including GitHub
    /// authentication errors or network problems.
    pub async fn load(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestDetails, IntakeError> {
        let metadata: PullRequestMetadata = self.client.pull_request(locator).await?;
        tracing::debug!(
            number = metadata.number,
            title = metadata.title.as_deref().unwrap_or_default(),
            "resolved pull request"
        );

        let comments: Vec<PullRequestComment> = self.client.pull_request_comments(locator).await?;
        tracing::debug!(count = comments.len(), "loaded issue comments");

        Ok(PullRequestDetails { metadata, comments })
    }
}
