//! Application error type.
//!
//! Every fallible handler and service returns [`AppError`], a status code paired
//! with an [`anyhow::Error`]. The response body is always `{"error": "<message>"}`.
//! Server errors never leak their cause to the client: the cause is logged and
//! replaced with a generic message.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned for every failed login, whatever the reason.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Message returned for every rejected bearer token, whatever the reason.
pub const INVALID_TOKEN: &str = "Invalid or expired token";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow::anyhow!(message))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(message))
    }

    pub fn forbidden(message: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(message))
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// The generic login failure. Unknown email and wrong password share it.
    pub fn invalid_credentials() -> Self {
        Self::unauthorized(INVALID_CREDENTIALS.to_string())
    }

    /// The generic token failure. Malformed, badly signed and expired tokens share it.
    pub fn invalid_token() -> Self {
        Self::unauthorized(INVALID_TOKEN.to_string())
    }

    pub fn email_taken() -> Self {
        Self::conflict(anyhow::anyhow!("Email already exists"))
    }

    /// Message sent to the client.
    pub fn message(&self) -> String {
        if self.status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
        }

        let body = Json(json!({
            "error": self.message()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        let err = AppError::invalid_credentials();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_invalid_token_is_unauthorized() {
        let err = AppError::invalid_token();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_TOKEN);
    }

    #[test]
    fn test_email_taken_is_conflict() {
        assert_eq!(AppError::email_taken().status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal(anyhow::anyhow!("relation \"admins\" does not exist"));
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_client_error_message_is_kept() {
        let err = AppError::not_found(anyhow::anyhow!("Admin not found"));
        assert_eq!(err.message(), "Admin not found");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::forbidden("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
