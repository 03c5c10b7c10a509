//! API handler modules

use std::any::Any;

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use tracing::error;

use super::errors::ApiError;

pub mod send;

/// Catch panics and return a 500 error
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    error!("handler panicked: {details}");

    (StatusCode::INTERNAL_SERVER_ERROR, details).into_response()
}

/// Responds to any unknown route
pub async fn not_found() -> ApiError {
    ApiError::new_404("This resource is not found.")
}
