//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::IntakeError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> IntakeError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return if is_auth_failure(source.status_code) {
            IntakeError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            IntakeError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return IntakeError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    IntakeError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::is_auth_failure;

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED, true)]
    #[case::forbidden(StatusCode::FORBIDDEN, true)]
    #[case::not_found(StatusCode::NOT_FOUND, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn classifies_authentication_statuses(#[case] status: StatusCode, #[case] expected: bool) {
        assert_eq!(is_auth_failure(status), expected, "status {status}");
    }
}
