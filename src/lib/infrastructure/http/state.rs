//! Application state module

use std::{fmt, sync::Arc};

use crate::domain::communication::messages::MailService;

/// Global application state
#[derive(Clone)]
pub struct AppState<S: MailService> {
    /// Mail service
    pub mail: Arc<S>,
}

impl<S> AppState<S>
where
    S: MailService,
{
    /// Create a new application state
    pub fn new(mail: S) -> Self {
        Self {
            mail: Arc::new(mail),
        }
    }
}

impl<S> fmt::Debug for AppState<S>
where
    S: MailService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("mail", &"MailService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::communication::messages::tests::MockMailService;

#[cfg(test)]
pub fn test_state(mail: Option<MockMailService>) -> AppState<MockMailService> {
    AppState::new(mail.unwrap_or_else(MockMailService::new))
}
