//! API error types and error handling

use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::rpc::DispatchError;
use crate::storage::StoreError;

/// API Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error response structure
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorResponse {
    /// Human readable error message
    pub detail: String,
}

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Chain code not in the registry
    #[error("Unsupported chain")]
    UnsupportedChain(String),

    /// No route matched the request
    #[error("Not Found")]
    RouteNotFound,

    /// The path exists but does not accept the request method
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Request body failed validation
    #[error("{0}")]
    Unprocessable(String),

    /// Document store failure
    #[error("Internal Server Error")]
    Storage(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage(e) = self {
            error!("Document store error: {}", e);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            ApiError::UnsupportedChain(_) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::UnsupportedChain(chain) => ApiError::UnsupportedChain(chain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::UnsupportedChain("xrp".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Unprocessable("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Storage(StoreError::InvalidDocument).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_unsupported_chain_body() {
        let response = ApiError::from(DispatchError::UnsupportedChain("xrp".into())).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.expect("body");
        assert_eq!(&body[..], br#"{"detail":"Unsupported chain"}"#);
    }

    #[test]
    fn test_storage_detail_is_generic() {
        let error = ApiError::Storage(StoreError::UnsupportedBackend("mongodb".into()));
        assert_eq!(error.to_string(), "Internal Server Error");
    }
}
