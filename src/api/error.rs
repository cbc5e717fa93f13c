use std::fmt::Formatter;

use actix_web::{HttpResponse, ResponseError};
use actix_web::http::StatusCode;
use serde_json::json;

use crate::geocode::GeocodeError;

#[derive(Debug)]
pub enum ApiError {
    MissingAddress,
    Resolve(GeocodeError),
}

impl ApiError {
    /// Message safe to hand back to the caller.
    fn public_message(&self) -> String {
        match self {
            ApiError::MissingAddress => "'address' query parameter is required".into(),
            ApiError::Resolve(GeocodeError::NotFound(msg)) => (*msg).into(),
            ApiError::Resolve(GeocodeError::Timeout(_)) => "Upstream timed out".into(),
            ApiError::Resolve(GeocodeError::UpstreamClient { .. }) => {
                "Upstream rejected the request".into()
            },
            ApiError::Resolve(GeocodeError::UpstreamServer { .. }) => "Upstream service error".into(),
            ApiError::Resolve(GeocodeError::Connection(_)) => "Upstream service unavailable".into(),
            ApiError::Resolve(GeocodeError::Unexpected(_)) => "Unexpected error".into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ApiError::MissingAddress => write!(f, "Missing address parameter"),
            ApiError::Resolve(inner) => write!(f, "Resolution failed: {}", inner),
        }
    }
}

impl From<GeocodeError> for ApiError {
    fn from(error: GeocodeError) -> Self {
        ApiError::Resolve(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingAddress => StatusCode::BAD_REQUEST,
            ApiError::Resolve(inner) => match inner {
                GeocodeError::NotFound(_) => StatusCode::NOT_FOUND,
                GeocodeError::UpstreamClient { .. } => StatusCode::BAD_REQUEST,
                GeocodeError::UpstreamServer { .. } => StatusCode::BAD_GATEWAY,
                GeocodeError::Connection(_) => StatusCode::BAD_GATEWAY,
                GeocodeError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                GeocodeError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(json!({ "error": self.public_message() }))
    }
}
