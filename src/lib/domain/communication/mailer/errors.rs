//! Mailer errors

use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The relay rejected or failed to deliver the email
    #[error("an error occurred while sending the email: {0}")]
    SendError(String),

    /// Invalid email address
    #[error("invalid email address")]
    InvalidEmail,

    /// The content type could not be used as a MIME header
    #[error("invalid content type \"{0}\"")]
    InvalidContentType(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}
