//! Message intents

use crate::domain::communication::{
    email_addresses::EmailAddress, mailer::ContentType, templates::PropertyMap,
};

/// The body of a message to send
#[derive(Clone, Debug, PartialEq)]
pub enum MessageContent {
    /// A body sent as-is, `text/plain` unless overridden
    Text(String),

    /// An HTML body sent verbatim
    Html(String),

    /// A named template component rendered with `props`
    Template {
        /// The component name
        id: String,

        /// Properties substituted into the component
        props: PropertyMap,
    },
}

/// Per-call options
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SendOptions {
    /// Overrides the content type of [`MessageContent::Text`] bodies.
    /// HTML and template bodies are always `text/html`.
    pub content_type: Option<ContentType>,
}

/// A request to send one message to one recipient
#[derive(Clone, Debug, PartialEq)]
pub struct MessageIntent {
    /// The recipient
    pub to: EmailAddress,

    /// The subject line
    pub subject: String,

    /// The body
    pub content: MessageContent,

    /// Options for this send
    pub options: SendOptions,
}

impl MessageIntent {
    /// Creates an intent with default options
    pub fn new(to: EmailAddress, subject: &str, content: MessageContent) -> Self {
        Self {
            to,
            subject: subject.to_string(),
            content,
            options: SendOptions::default(),
        }
    }

    /// Replaces the options of this intent
    pub fn with_options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }
}
