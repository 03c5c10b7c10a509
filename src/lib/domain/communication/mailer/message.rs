//! Email envelope

use std::fmt;

use crate::domain::communication::email_addresses::EmailAddress;

/// The MIME type of an email body
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentType {
    /// `text/plain`
    #[default]
    Plain,

    /// `text/html`
    Html,

    /// Any other MIME type
    Custom(String),
}

impl ContentType {
    /// The MIME type as it appears in the `Content-Type` header
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Plain => "text/plain",
            ContentType::Html => "text/html",
            ContentType::Custom(value) => value,
        }
    }
}

impl From<&str> for ContentType {
    fn from(value: &str) -> Self {
        match value.trim() {
            "text/plain" => ContentType::Plain,
            "text/html" => ContentType::Html,
            other => ContentType::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity emails are sent from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    name: Option<String>,
    address: EmailAddress,
}

impl Sender {
    /// Creates a sender. A blank `name` is treated as no name.
    pub fn new(name: Option<&str>, address: EmailAddress) -> Self {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from);

        Self { name, address }
    }

    /// The display name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The sender address
    pub fn address(&self) -> &EmailAddress {
        &self.address
    }

    /// The `From` header value: `Name<address>` or just the address
    pub fn header(&self) -> String {
        match &self.name {
            Some(name) => format!("{name}<{}>", self.address),
            None => self.address.to_string(),
        }
    }
}

/// A fully resolved email, ready to be handed to a [`Mailer`](super::Mailer)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// The sender
    pub from: Sender,

    /// The recipient
    pub to: EmailAddress,

    /// The subject line
    pub subject: String,

    /// The MIME type of `body`
    pub content_type: ContentType,

    /// The body
    pub body: String,
}
