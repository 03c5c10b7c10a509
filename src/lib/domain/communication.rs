//! Outbound email: templates, envelopes and dispatch.

pub mod email_addresses;
pub mod mailer;
pub mod messages;
pub mod templates;
