use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// A required field is missing or blank in an upstream response
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Upstream responded with client error {status}")]
    UpstreamClient { status: u16 },
    #[error("Upstream responded with server error {status}")]
    UpstreamServer { status: u16 },
    #[error("Upstream request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("Could not connect to upstream: {0}")]
    Connection(#[source] reqwest::Error),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl GeocodeError {
    /// Maps a non-success upstream status onto the failure taxonomy.
    pub fn from_status(status: StatusCode) -> GeocodeError {
        if status.is_client_error() {
            GeocodeError::UpstreamClient { status: status.as_u16() }
        } else if status.is_server_error() {
            GeocodeError::UpstreamServer { status: status.as_u16() }
        } else {
            GeocodeError::Unexpected(format!("Unexpected upstream status {}", status))
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(error: reqwest::Error) -> Self {
        // Connect timeouts report both is_timeout and is_connect
        if error.is_timeout() {
            GeocodeError::Timeout(error)
        } else if error.is_connect() {
            GeocodeError::Connection(error)
        } else {
            GeocodeError::Unexpected(error.to_string())
        }
    }
}

impl From<serde_json::Error> for GeocodeError {
    fn from(error: serde_json::Error) -> Self {
        GeocodeError::Unexpected(format!("Invalid upstream JSON: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            GeocodeError::from_status(StatusCode::NOT_FOUND),
            GeocodeError::UpstreamClient { status: 404 }
        ));
        assert!(matches!(
            GeocodeError::from_status(StatusCode::BAD_GATEWAY),
            GeocodeError::UpstreamServer { status: 502 }
        ));
        assert!(matches!(
            GeocodeError::from_status(StatusCode::NOT_MODIFIED),
            GeocodeError::Unexpected(_)
        ));
    }

    #[test]
    fn test_from_invalid_json() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(GeocodeError::from(err), GeocodeError::Unexpected(_)));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            GeocodeError::NotFound("District not found").to_string(),
            "District not found"
        );
    }
}
