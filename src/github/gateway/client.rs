//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::IntakeError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the API base URL, authenticated with the
/// token when one is supplied.
///
/// Without a token the client is anonymous and GitHub applies its own limits
/// and visibility rules.
///
/// # Errors
///
/// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
/// `IntakeError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, IntakeError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;

    let builder = match token {
        Some(personal_token) => Octocrab::builder().personal_token(personal_token.as_ref()),
        None => Octocrab::builder(),
    };

    builder
        .base_uri(base_uri)
        .map_err(|error| IntakeError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
