//! Mail service

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{
    mailer::{ContentType, Envelope, Mailer, Sender},
    templates::TemplateRenderer,
};

use super::{DispatchError, MessageContent, MessageIntent};

/// Mail service
#[async_trait]
pub trait MailService: Clone + Send + Sync + 'static {
    /// Resolves a message intent into an envelope and sends it.
    ///
    /// # Arguments
    /// * `intent` - The [`MessageIntent`] describing what to send.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the transport accepted the message,
    /// or an [`Err`] containing a [`DispatchError`]. Failed sends are not retried.
    async fn dispatch(&self, intent: MessageIntent) -> Result<(), DispatchError>;
}

#[cfg(test)]
mock! {
    pub MailService {}

    impl Clone for MailService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl MailService for MailService {
        async fn dispatch(&self, intent: MessageIntent) -> Result<(), DispatchError>;
    }
}

/// Mail service implementation
#[derive(Debug)]
pub struct MailServiceImpl<M, T>
where
    M: Mailer,
    T: TemplateRenderer,
{
    mailer: Arc<M>,
    templates: Arc<T>,
    sender: Sender,
}

impl<M, T> Clone for MailServiceImpl<M, T>
where
    M: Mailer,
    T: TemplateRenderer,
{
    fn clone(&self) -> Self {
        Self {
            mailer: Arc::clone(&self.mailer),
            templates: Arc::clone(&self.templates),
            sender: self.sender.clone(),
        }
    }
}

impl<M, T> MailServiceImpl<M, T>
where
    M: Mailer,
    T: TemplateRenderer,
{
    /// Creates a new mail service.
    pub fn new(mailer: Arc<M>, templates: Arc<T>, sender: Sender) -> Self {
        Self {
            mailer,
            templates,
            sender,
        }
    }

    /// Builds the envelope for `intent` without sending it.
    pub fn envelope(&self, intent: MessageIntent) -> Result<Envelope, DispatchError> {
        let MessageIntent {
            to,
            subject,
            content,
            options,
        } = intent;

        let (content_type, body) = match content {
            MessageContent::Template { id, props } => {
                let body = self
                    .templates
                    .render(&id, &props)
                    .map_err(DispatchError::TemplateRenderError)?;

                (ContentType::Html, body)
            }
            MessageContent::Html(body) => (ContentType::Html, body),
            MessageContent::Text(body) => (options.content_type.unwrap_or_default(), body),
        };

        Ok(Envelope {
            from: self.sender.clone(),
            to,
            subject,
            content_type,
            body,
        })
    }
}

#[async_trait]
impl<M, T> MailService for MailServiceImpl<M, T>
where
    M: Mailer,
    T: TemplateRenderer,
{
    async fn dispatch(&self, intent: MessageIntent) -> Result<(), DispatchError> {
        let envelope = self.envelope(intent)?;

        self.mailer
            .send(&envelope)
            .await
            .map_err(DispatchError::DeliveryError)
    }
}
