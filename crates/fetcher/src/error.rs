use anyhow::anyhow;
use http::StatusCode;
use thiserror::Error;

/// Failure classes surfaced by the data source. The stats and roast layers
/// never see these; the caller maps each class to its own user-facing
/// message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("user not found")]
    NotFound,
    #[error("rate limit exceeded")]
    RateLimited,
    #[error("network error: {0}")]
    Network(#[source] anyhow::Error),
    #[error("malformed response: {0}")]
    Decode(#[source] anyhow::Error),
}

impl FetchError {
    pub fn from_status(status: StatusCode, endpoint: &str) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound,
            // GitHub reports an exhausted unauthenticated quota as 403.
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            _ => Self::Network(anyhow!("unexpected status {status} for {endpoint}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_classes() {
        assert!(matches!(
            FetchError::from_status(StatusCode::NOT_FOUND, "users/x"),
            FetchError::NotFound
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::FORBIDDEN, "users/x"),
            FetchError::RateLimited
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::TOO_MANY_REQUESTS, "users/x"),
            FetchError::RateLimited
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::BAD_GATEWAY, "users/x"),
            FetchError::Network(_)
        ));
    }
}
