//! Dependency extraction for one pull request number.

use downstream_prs::{DependencyExtractor, DownstreamConfig, IntakeError, OctocrabGateway};

/// Extracts the downstream dependency URLs of pull request `number`.
///
/// # Errors
///
/// Returns configuration errors for an unusable repository, API base, or
/// pattern, and propagates GitHub failures unchanged.
pub async fn run(config: &DownstreamConfig, number: u64) -> Result<Vec<String>, IntakeError> {
    let locator = config.locator(number)?;
    let pattern = config.dependency_pattern()?;
    let token = config.resolve_token();

    if token.is_none() {
        tracing::warn!("no GitHub token configured; sending unauthenticated requests");
    }
    tracing::debug!(
        owner = locator.owner().as_str(),
        repo = locator.repository().as_str(),
        number,
        api_base = locator.api_base().as_str(),
        "scanning pull request comments"
    );

    let gateway = OctocrabGateway::for_token(token.as_ref(), &locator)?;
    let extractor = DependencyExtractor::new(&gateway, pattern);
    extractor.extract_dependencies(&locator).await
}
