//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::communication::{
    email_addresses::EmailAddressError, messages::DispatchError, templates::TemplateError,
};

/// An error raised in the API, rendered as a plain text body
#[derive(Debug)]
pub struct ApiError {
    /// The status code
    pub status: StatusCode,

    /// The error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new not found error
    pub fn new_404(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Create a new unprocessable entity error
    pub fn new_422(message: &str) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = self.status.as_u16(), "{}", self.message);

        (self.status, self.message).into_response()
    }
}

impl From<EmailAddressError> for ApiError {
    fn from(err: EmailAddressError) -> Self {
        match err {
            EmailAddressError::EmptyEmailAddress => {
                ApiError::new_422("Please provide an email address")
            }
            EmailAddressError::InvalidEmailAddress => {
                ApiError::new_422("Please provide a valid email address")
            }
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::TemplateRenderError(
                err @ (TemplateError::AssetNotFound(_) | TemplateError::InvalidArgument(_)),
            ) => ApiError::new_422(&format!("Failed to send template email: {err}")),
            DispatchError::TemplateRenderError(err) => {
                ApiError::new_500(&format!("Failed to send template email: {err}"))
            }
            DispatchError::DeliveryError(err) => {
                ApiError::new_500(&format!("Failed to send email: {err}"))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;

    use super::*;
    use crate::domain::communication::mailer::MailerError;

    #[tokio::test]
    async fn test_error_response_is_plain_text() -> TestResult {
        let response = ApiError::new_400("No content or template provided").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()["content-type"]
            .to_str()?
            .starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, "No content or template provided");

        Ok(())
    }

    #[test]
    fn test_missing_template_is_unprocessable() {
        let error = ApiError::from(DispatchError::TemplateRenderError(
            TemplateError::AssetNotFound("welcome".to_string()),
        ));

        assert_eq!(error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error.message,
            "Failed to send template email: template \"welcome\" not found"
        );
    }

    #[test]
    fn test_missing_section_is_internal_error() {
        let error = ApiError::from(DispatchError::TemplateRenderError(
            TemplateError::SectionNotFound("main".to_string()),
        ));

        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_delivery_error_is_internal_error() {
        let error = ApiError::from(DispatchError::DeliveryError(MailerError::SendError(
            "connection refused".to_string(),
        )));

        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.message,
            "Failed to send email: an error occurred while sending the email: connection refused"
        );
    }
}
