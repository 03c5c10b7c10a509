//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::handlers::send;

/// OpenAPI description of the relay API
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Mail Relay"),
    paths(send::handler),
    components(schemas(
        send::SendEmailBody,
        send::ContentBody,
        send::TemplateBody,
        send::SendEmailResponse,
    ))
)]
pub struct ApiDocs;

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_openapi_documents_send_endpoint() -> TestResult {
        let json = ApiDocs::openapi().to_json()?;

        assert!(json.contains("\"/send\""));
        assert!(json.contains("SendEmailBody"));

        Ok(())
    }
}
