//! Unit tests for the GitHub intake module.

use mockall::Sequence;
use mockall::predicate::always;
use rstest::{fixture, rstest};

use super::{
    IntakeError, MockPullRequestGateway, PersonalAccessToken, PullRequestComment,
    PullRequestDetails, PullRequestIntake, PullRequestLocator, PullRequestMetadata,
    PullRequestNumber, RepositoryName, RepositoryOwner,
};

fn locator_for(api_base: &str, number: u64) -> Result<PullRequestLocator, IntakeError> {
    PullRequestLocator::new(
        api_base,
        RepositoryOwner::new("GoogleCloudPlatform")?,
        RepositoryName::new("magic-modules")?,
        PullRequestNumber::new(number)?,
    )
}

#[fixture]
fn sample_locator() -> PullRequestLocator {
    locator_for("https://api.github.com", 4).expect("sample locator should build")
}

fn comment(id: u64, body: Option<&str>) -> PullRequestComment {
    PullRequestComment {
        id,
        body: body.map(ToOwned::to_owned),
        author: Some(String::from("reviewer")),
    }
}

#[rstest]
fn builds_api_paths_from_parts(sample_locator: PullRequestLocator) {
    assert_eq!(
        sample_locator.pull_request_path(),
        "/repos/GoogleCloudPlatform/magic-modules/pulls/4",
        "pull request path mismatch"
    );
    assert_eq!(
        sample_locator.comments_path(),
        "/repos/GoogleCloudPlatform/magic-modules/issues/4/comments",
        "comments path mismatch"
    );
}

#[rstest]
fn keeps_enterprise_api_base() {
    let locator =
        locator_for("https://ghe.example.com/api/v3", 7).expect("enterprise locator should build");
    assert_eq!(
        locator.api_base().as_str(),
        "https://ghe.example.com/api/v3",
        "enterprise api base mismatch"
    );
    assert_eq!(locator.number().get(), 7, "number mismatch");
}

#[rstest]
fn rejects_zero_number() {
    let result = PullRequestNumber::new(0);
    assert!(
        matches!(result, Err(IntakeError::InvalidPullRequestNumber)),
        "expected InvalidPullRequestNumber for zero, got {result:?}"
    );
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn rejects_blank_repository_segments(#[case] value: &str) {
    assert_eq!(
        RepositoryOwner::new(value),
        Err(IntakeError::MissingRepositorySegment),
        "owner should be rejected"
    );
    assert_eq!(
        RepositoryName::new(value),
        Err(IntakeError::MissingRepositorySegment),
        "name should be rejected"
    );
}

#[rstest]
#[case::not_a_url("api.github.com")]
#[case::mailto("mailto:octocat@example.com")]
fn rejects_invalid_api_base(#[case] api_base: &str) {
    let result = locator_for(api_base, 1);
    assert!(
        matches!(result, Err(IntakeError::InvalidUrl(_))),
        "expected InvalidUrl for {api_base}, got {result:?}"
    );
}

#[rstest]
fn rejects_empty_token() {
    let result = PersonalAccessToken::new("  ");
    assert!(
        matches!(result, Err(IntakeError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn trims_token_whitespace() {
    let token = PersonalAccessToken::new(" ghp_example\n").expect("token should be accepted");
    assert_eq!(token.value(), "ghp_example", "token should be trimmed");
}

#[rstest]
fn comment_bodies_skip_missing_bodies() {
    let details = PullRequestDetails {
        metadata: PullRequestMetadata::default(),
        comments: vec![
            comment(1, Some("first")),
            comment(2, None),
            comment(3, Some("third")),
        ],
    };

    let bodies: Vec<&str> = details.comment_bodies().collect();
    assert_eq!(bodies, vec!["first", "third"], "bodies mismatch");
}

#[rstest]
#[tokio::test]
async fn loads_metadata_before_comments(sample_locator: PullRequestLocator) {
    let mut gateway = MockPullRequestGateway::new();
    let mut sequence = Sequence::new();

    gateway
        .expect_pull_request()
        .with(always())
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| {
            Ok(PullRequestMetadata {
                number: 4,
                title: Some(String::from("demo")),
                state: Some(String::from("open")),
                html_url: None,
                author: Some(String::from("octocat")),
            })
        });

    gateway
        .expect_pull_request_comments()
        .with(always())
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(vec![comment(1, Some("first")), comment(2, Some("second"))]));

    let intake = PullRequestIntake::new(&gateway);
    let PullRequestDetails { metadata, comments } = intake
        .load(&sample_locator)
        .await
        .expect("intake should succeed");

    assert_eq!(metadata.number, 4, "number mismatch");
    assert_eq!(metadata.title, Some(String::from("demo")), "title mismatch");
    assert_eq!(
        comments.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2],
        "comments should keep gateway order"
    );
}

#[rstest]
#[tokio::test]
async fn skips_comments_when_pull_request_fails(sample_locator: PullRequestLocator) {
    let mut gateway = MockPullRequestGateway::new();

    gateway.expect_pull_request().times(1).returning(|_| {
        Err(IntakeError::Api {
            message: String::from("pull request failed with status 404 Not Found: Not Found"),
        })
    });
    gateway.expect_pull_request_comments().never();

    let intake = PullRequestIntake::new(&gateway);
    let result = intake.load(&sample_locator).await;

    assert!(
        matches!(result, Err(IntakeError::Api { .. })),
        "expected Api error, got {result:?}"
    );
}
