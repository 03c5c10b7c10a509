//! Mail transport port

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;
mod message;

pub use errors::MailerError;
pub use message::{ContentType, Envelope, Sender};

/// Delivers fully resolved messages
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `envelope` - The [`Envelope`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure. Exactly one delivery
    /// attempt is made per call.
    async fn send(&self, envelope: &Envelope) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, envelope: &Envelope) -> Result<(), MailerError>;
    }
}

#[cfg(test)]
/// Test doubles for the mailer port
pub mod tests {
    pub use super::MockMailer;
}
