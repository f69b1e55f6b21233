//! Lists the downstream pull requests a pull request depends on.
//!
//! Contributors declare cross-repository dependencies by adding lines of the
//! form `depends: https://github.com/<owner>/<repo>/pull/<n>` to the comment
//! thread of a pull request. This crate loads that thread through Octocrab
//! and extracts the declared URLs in thread order.

pub mod config;
pub mod dependencies;
pub mod github;

pub use config::DownstreamConfig;
pub use dependencies::{DependencyExtractor, DependencyPattern, extract_from_bodies};
pub use github::{
    IntakeError, OctocrabGateway, PersonalAccessToken, PullRequestComment, PullRequestDetails,
    PullRequestGateway, PullRequestIntake, PullRequestLocator, PullRequestMetadata,
};
