//! Dispatch errors

use thiserror::Error;

use crate::domain::communication::{mailer::MailerError, templates::TemplateError};

/// Errors that can occur when dispatching a message
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The template body could not be rendered
    #[error("could not render template")]
    TemplateRenderError(#[source] TemplateError),

    /// The transport failed to deliver the message
    #[error("could not deliver email")]
    DeliveryError(#[source] MailerError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_chain_does_not_repeat_the_cause() {
        let err = DispatchError::DeliveryError(MailerError::SendError("timeout".to_string()));
        let chain = anyhow::Error::new(err);

        assert_eq!(chain.to_string(), "could not deliver email");
        assert_eq!(
            format!("{chain:#}"),
            "could not deliver email: an error occurred while sending the email: timeout"
        );
    }

    #[test]
    fn test_render_error_exposes_template_error_as_source() {
        let err = DispatchError::TemplateRenderError(TemplateError::AssetNotFound(
            "welcome".to_string(),
        ));

        assert_eq!(err.to_string(), "could not render template");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("template \"welcome\" not found")
        );
    }
}
