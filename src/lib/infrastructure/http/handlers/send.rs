//! Send email handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    domain::communication::{
        email_addresses::EmailAddress,
        messages::{MailService, MessageContent, MessageIntent},
        templates::PropertyMap,
    },
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Literal message body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ContentBody {
    /// The message body
    #[schema(example = "Your order has shipped.")]
    pub body: String,

    /// Send `body` as `text/html`
    #[serde(default)]
    pub html: bool,
}

/// Template reference
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TemplateBody {
    /// The template component to render
    #[schema(example = "verify_email")]
    pub id: String,

    /// Properties substituted into the component
    #[serde(default)]
    #[schema(value_type = Object)]
    pub props: PropertyMap,
}

/// Send email request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailBody {
    /// The recipient's email address
    #[schema(example = "email@example.com")]
    pub address: String,

    /// The subject line
    #[schema(example = "Welcome!")]
    pub subject: String,

    /// A literal body, ignored when `template` is present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentBody>,

    /// A template to render as the body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateBody>,
}

impl TryFrom<SendEmailBody> for MessageIntent {
    type Error = ApiError;

    fn try_from(request: SendEmailBody) -> Result<Self, Self::Error> {
        let content = match (request.template, request.content) {
            (Some(template), _) => MessageContent::Template {
                id: template.id,
                props: template.props,
            },
            (None, Some(ContentBody { body, html: true })) => MessageContent::Html(body),
            (None, Some(ContentBody { body, html: false })) => MessageContent::Text(body),
            (None, None) => return Err(ApiError::new_400("No content or template provided")),
        };

        Ok(MessageIntent::new(
            EmailAddress::new(&request.address)?,
            &request.subject,
            content,
        ))
    }
}

/// Send email response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    /// A confirmation message
    #[schema(example = "Email sent successfully")]
    pub message: String,
}

/// Send an email
#[utoipa::path(
    post,
    operation_id = "send_email",
    tag = "Mail",
    path = "/send",
    request_body = SendEmailBody,
    responses(
        (status = StatusCode::OK, description = "Email sent", body = SendEmailResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing content or malformed body", body = String, example = json!("No content or template provided")),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid address or unknown template", body = String),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Rendering or delivery failed", body = String, example = json!("Failed to send email: <error>")),
    )
)]
pub async fn handler<S: MailService>(
    State(state): State<AppState<S>>,
    request: Result<Json<SendEmailBody>, JsonRejection>,
) -> Result<(StatusCode, Json<SendEmailResponse>), ApiError> {
    let Json(request) = request?;

    let intent: MessageIntent = request.try_into()?;
    let to = intent.to.clone();

    state.mail.dispatch(intent).await?;

    info!(%to, "email sent");

    Ok((
        StatusCode::OK,
        Json(SendEmailResponse {
            message: "Email sent successfully".to_string(),
        }),
    ))
}
