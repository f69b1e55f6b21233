//! Octocrab gateway: one request for the pull request, then a walk over
//! every page of its issue thread.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::IntakeError;
use crate::github::locator::{PersonalAccessToken, PullRequestLocator};
use crate::github::models::{
    ApiComment, ApiPullRequest, PullRequestComment, PullRequestMetadata,
};

use super::PullRequestGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

const PULL_REQUEST: &str = "pull request";
const ISSUE_THREAD: &str = "issue comments";

/// Reads pull requests through an Octocrab client.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Wraps an existing Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a client against the locator's API base, authenticated when a
    /// token is given and anonymous otherwise.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: Option<&PersonalAccessToken>,
        locator: &PullRequestLocator,
    ) -> Result<Self, IntakeError> {
        build_octocrab_client(token, locator.api_base().as_str()).map(Self::new)
    }

    /// Follows `next` links from the first page until GitHub stops
    /// returning one, keeping comments in the order they were served.
    async fn issue_thread(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<ApiComment>, IntakeError> {
        let mut page: Page<ApiComment> = self
            .client
            .get(locator.comments_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error(ISSUE_THREAD, &error))?;

        let mut thread = Vec::new();
        let mut pages = 1_u32;
        loop {
            thread.append(&mut page.items);
            let next = self
                .client
                .get_page::<ApiComment>(&page.next)
                .await
                .map_err(|error| map_octocrab_error(ISSUE_THREAD, &error))?;
            match next {
                Some(following) => {
                    page = following;
                    pages += 1;
                }
                None => break,
            }
        }

        tracing::debug!(pages, comments = thread.len(), "read issue thread");
        Ok(thread)
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestMetadata, IntakeError> {
        let pull_request: ApiPullRequest = self
            .client
            .get(locator.pull_request_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error(PULL_REQUEST, &error))?;
        Ok(pull_request.into())
    }

    async fn pull_request_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<PullRequestComment>, IntakeError> {
        let thread = self.issue_thread(locator).await?;
        Ok(thread.into_iter().map(PullRequestComment::from).collect())
    }
}
