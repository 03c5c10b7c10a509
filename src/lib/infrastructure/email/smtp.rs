//! SMTP email service implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    address::AddressError,
    message::{header, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Message, SmtpTransport, Transport,
};
use tracing::debug;

use crate::domain::communication::{
    email_addresses::{EmailAddress, EmailAddressError},
    mailer::{Envelope, Mailer, MailerError, Sender},
};

/// Port on which relays expect TLS from the first byte
const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(id = "smtp_host", long = "smtp-host", env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(
        id = "smtp_port",
        long = "smtp-port",
        env = "SMTP_PORT",
        default_value = "587"
    )]
    pub port: u16,

    /// The SMTP username, authentication is skipped when empty
    #[clap(id = "smtp_user", long = "smtp-user", env = "SMTP_USER", default_value = "")]
    pub username: String,

    /// The SMTP password
    #[clap(id = "smtp_pass", long = "smtp-pass", env = "SMTP_PASS", default_value = "")]
    pub password: String,

    /// Verify the TLS certificate
    #[clap(
        id = "smtp_verify_tls",
        long = "smtp-verify-tls",
        env = "SMTP_VERIFY_TLS",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub verify_tls: bool,

    /// Require STARTTLS (TLS upgrade on connection)
    #[clap(
        id = "smtp_starttls",
        long = "smtp-starttls",
        env = "SMTP_STARTTLS",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub starttls: bool,
}

impl SMTPConfig {
    fn tls(&self) -> Result<Tls> {
        let parameters = TlsParameters::builder(self.host.clone())
            .dangerous_accept_invalid_certs(!self.verify_tls)
            .build()?;

        Ok(if self.port == IMPLICIT_TLS_PORT {
            Tls::Wrapper(parameters)
        } else if self.starttls {
            Tls::Required(parameters)
        } else {
            Tls::Opportunistic(parameters)
        })
    }
}

/// Sender identity configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SenderConfig {
    /// The sender's display name
    #[clap(id = "mail_name", long = "mail-name", env = "MAIL_NAME")]
    pub name: Option<String>,

    /// The sender's email address
    #[clap(id = "mail_from", long = "mail-from", env = "MAIL_FROM")]
    pub address: String,
}

impl SenderConfig {
    /// Validates the configuration into a [`Sender`]
    pub fn sender(&self) -> Result<Sender, EmailAddressError> {
        Ok(Sender::new(
            self.name.as_deref(),
            EmailAddress::new(&self.address)?,
        ))
    }
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SMTPConfig) -> Self {
        Self { config }
    }

    /// Builds a transport for a single delivery
    pub fn mailer(&self) -> Result<SmtpTransport> {
        let mut relay = SmtpTransport::builder_dangerous(&self.config.host)
            .port(self.config.port)
            .tls(self.config.tls()?);

        if !self.config.username.is_empty() {
            relay = relay.credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ));
        }

        Ok(relay.build())
    }
}

/// Converts an [`Envelope`] into a MIME message
pub fn message(envelope: &Envelope) -> Result<Message, MailerError> {
    let from = Mailbox::new(
        envelope.from.name().map(String::from),
        envelope.from.address().as_str().parse()?,
    );

    let content_type = header::ContentType::parse(envelope.content_type.as_str())
        .map_err(|_| MailerError::InvalidContentType(envelope.content_type.to_string()))?;

    Message::builder()
        .from(from)
        .to(Mailbox::new(None, envelope.to.as_str().parse()?))
        .subject(envelope.subject.clone())
        .header(content_type)
        .body(envelope.body.clone())
        .context("failed to build email")
        .map_err(MailerError::from)
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidEmail
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send(&self, envelope: &Envelope) -> Result<(), MailerError> {
        let email = message(envelope)?;
        let transport = self.mailer()?;

        debug!(
            host = %self.config.host,
            port = self.config.port,
            to = %envelope.to,
            "sending email"
        );

        tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .context("email delivery task failed")?
            .map(|_| ())
            .map_err(|e| MailerError::SendError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::domain::communication::mailer::ContentType;

    fn envelope(content_type: ContentType) -> Envelope {
        Envelope {
            from: Sender::new(
                Some("Wizzl"),
                EmailAddress::new("noreply@example.com").expect("valid email"),
            ),
            to: EmailAddress::new("user@example.com").expect("valid email"),
            subject: "Hello".to_string(),
            content_type,
            body: "<b>hi</b>".to_string(),
        }
    }

    #[test]
    fn test_message_headers() -> TestResult {
        let formatted = String::from_utf8(message(&envelope(ContentType::Html))?.formatted())?;

        assert!(formatted.contains("From: Wizzl <noreply@example.com>"));
        assert!(formatted.contains("To: user@example.com"));
        assert!(formatted.contains("Subject: Hello"));
        assert!(formatted.contains("Content-Type: text/html"));
        assert!(formatted.contains("<b>hi</b>"));

        Ok(())
    }

    #[test]
    fn test_message_with_invalid_content_type() {
        let result = message(&envelope(ContentType::Custom("not a mime type".to_string())));

        assert!(matches!(result, Err(MailerError::InvalidContentType(_))));
    }

    #[test]
    fn test_sender_config() -> TestResult {
        let config = SenderConfig::parse_from([
            "server",
            "--mail-name",
            "Wizzl",
            "--mail-from",
            "noreply@example.com",
        ]);

        assert_eq!(config.sender()?.header(), "Wizzl<noreply@example.com>");

        Ok(())
    }

    #[test]
    fn test_sender_config_rejects_invalid_address() {
        let config = SenderConfig {
            name: None,
            address: "not an email".to_string(),
        };

        assert!(config.sender().is_err());
    }

    #[test]
    fn test_tls_mode_follows_port() -> TestResult {
        let mut config = SMTPConfig {
            host: "smtp.example.com".to_string(),
            port: 465,
            starttls: true,
            verify_tls: true,
            ..Default::default()
        };

        assert!(matches!(config.tls()?, Tls::Wrapper(_)));

        config.port = 587;
        assert!(matches!(config.tls()?, Tls::Required(_)));

        config.starttls = false;
        assert!(matches!(config.tls()?, Tls::Opportunistic(_)));

        Ok(())
    }
}
