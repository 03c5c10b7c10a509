//! Message dispatch

mod errors;
mod intent;
mod service;

pub use errors::DispatchError;
pub use intent::{MessageContent, MessageIntent, SendOptions};
pub use service::{MailService, MailServiceImpl};
