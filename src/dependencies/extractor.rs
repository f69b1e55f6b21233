//! Gateway-backed dependency extraction for a single pull request.

use crate::github::{IntakeError, PullRequestGateway, PullRequestIntake, PullRequestLocator};

use super::pattern::{DependencyPattern, extract_from_bodies};

/// Loads a pull request's comments and extracts its downstream dependencies.
pub struct DependencyExtractor<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    intake: PullRequestIntake<'client, Gateway>,
    pattern: DependencyPattern,
}

impl<'client, Gateway> DependencyExtractor<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Creates an extractor that reads comments through `client`.
    #[must_use]
    pub const fn new(client: &'client Gateway, pattern: DependencyPattern) -> Self {
        Self {
            intake: PullRequestIntake::new(client),
            pattern,
        }
    }

    /// Resolves the pull request, then returns every declared dependency URL
    /// from its issue comments in thread order.
    ///
    /// An empty list is a normal result for a pull request without
    /// declarations.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures unchanged: authentication, API (including
    /// a missing pull request), and network errors.
    pub async fn extract_dependencies(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<String>, IntakeError> {
        let details = self.intake.load(locator).await?;
        let dependencies = extract_from_bodies(&self.pattern, details.comment_bodies());

        tracing::debug!(
            pull_request = locator.number().get(),
            count = dependencies.len(),
            "extracted downstream dependencies"
        );
        Ok(dependencies)
    }
}
