//! Infrastructure adapters

pub mod email;
pub mod http;
pub mod templates;
