use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum HrServiceError {
    #[error("email already registered")]
    AlreadyExists,

    #[error("not found")]
    NotFound,

    /// One message for unknown email, unverified account and wrong password,
    /// so the response never reveals which accounts exist.
    #[error("email or password is incorrect")]
    InvalidCredentials,

    #[error("verification failed")]
    VerificationFailed,

    #[error("invalid token")]
    TokenInvalid,

    #[error("{0}")]
    Validation(String),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl HrServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::VerificationFailed => "VERIFICATION_FAILED",
            Self::TokenInvalid => "TOKEN_INVALID",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::VerificationFailed => StatusCode::BAD_REQUEST,
            Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HrServiceError {
    fn into_response(self) -> Response {
        // Client errors surface in the response body; only internal failures
        // are worth an error-level log line.
        if let Self::Internal(error) = &self {
            tracing::error!(error = %error, kind = self.kind(), "internal error");
        }

        let body = Json(json!({
            "kind": self.kind(),
            "message": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}
