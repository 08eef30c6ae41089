/// Error types for the API Gateway
///
/// Every failure that reaches a client goes through `GatewayError`, which
/// renders a stable JSON body `{"detail": ..., "status": ...}`. The
/// RPC-status and auth-failure translations live here and nowhere else, so
/// adding a new downstream error kind is a one-file edit.
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tonic::Code;

use crate::identity::AuthError;

/// Application error taxonomy
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Malformed or invalid request
    #[error("{0}")]
    BadRequest(String),

    /// Missing or rejected credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed
    #[error("{0}")]
    Forbidden(String),

    /// Downstream service unreachable
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Downstream service reachable but erroring; the upstream status is
    /// propagated when it is a 5xx, otherwise masked as 500
    #[error("{detail}")]
    UpstreamFault { status: u16, detail: String },

    /// Unexpected internal fault
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// Translate a gRPC status from the post service into the HTTP taxonomy.
    ///
    /// The detail string travels through verbatim; unmapped codes (including
    /// transport timeouts) collapse to 500.
    pub fn from_rpc_status(status: tonic::Status) -> Self {
        let detail = status.message().to_string();
        match status.code() {
            Code::NotFound => GatewayError::NotFound(detail),
            Code::InvalidArgument => GatewayError::BadRequest(detail),
            Code::PermissionDenied => GatewayError::Forbidden(detail),
            _ => GatewayError::Internal(format!("Post service error: {detail}")),
        }
    }
}

impl From<AuthError> for GatewayError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken { detail } => GatewayError::Unauthorized(match detail {
                Some(detail) => format!("Invalid token: {detail}"),
                None => "Invalid token".to_string(),
            }),
            AuthError::ServiceUnavailable(reason) => GatewayError::ServiceUnavailable(format!(
                "Identity service connection error: {reason}"
            )),
            AuthError::Upstream { status } => GatewayError::UpstreamFault {
                status,
                detail: format!("Identity service error: status {status}"),
            },
            AuthError::MalformedProfile(reason) => {
                GatewayError::Internal(format!("Identity service returned invalid profile: {reason}"))
            }
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GatewayError::Forbidden(_) => StatusCode::FORBIDDEN,
            GatewayError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::UpstreamFault { status, .. } if *status >= 500 => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            GatewayError::UpstreamFault { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "detail": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_status_mapping_follows_the_table() {
        let cases = [
            (Code::NotFound, StatusCode::NOT_FOUND),
            (Code::InvalidArgument, StatusCode::BAD_REQUEST),
            (Code::PermissionDenied, StatusCode::FORBIDDEN),
            (Code::Internal, StatusCode::INTERNAL_SERVER_ERROR),
            (Code::Unavailable, StatusCode::INTERNAL_SERVER_ERROR),
            (Code::DeadlineExceeded, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (code, expected) in cases {
            let err = GatewayError::from_rpc_status(tonic::Status::new(code, "boom"));
            assert_eq!(err.status_code(), expected, "code {code:?}");
        }
    }

    #[test]
    fn rpc_detail_passes_through_verbatim() {
        let err = GatewayError::from_rpc_status(tonic::Status::not_found("Post with ID x not found"));
        assert_eq!(err.to_string(), "Post with ID x not found");
    }

    #[test]
    fn upstream_fault_propagates_5xx_and_masks_4xx() {
        let bad_gateway = GatewayError::UpstreamFault {
            status: 502,
            detail: "Identity service error: status 502".to_string(),
        };
        assert_eq!(bad_gateway.status_code(), StatusCode::BAD_GATEWAY);

        let teapot = GatewayError::UpstreamFault {
            status: 418,
            detail: "Identity service error: status 418".to_string(),
        };
        assert_eq!(teapot.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_failures_map_to_401_and_503() {
        let invalid: GatewayError = AuthError::InvalidToken {
            detail: Some("Token expired".to_string()),
        }
        .into();
        assert_eq!(invalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(invalid.to_string(), "Invalid token: Token expired");

        let unreachable: GatewayError =
            AuthError::ServiceUnavailable("connection refused".to_string()).into();
        assert_eq!(unreachable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
