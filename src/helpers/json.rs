use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::Value;

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct JsonResponse {
    pub success: bool,
    pub code: u16,
    pub error: String,
    pub details: Option<Value>,
}

#[derive(Debug, Default)]
pub struct JsonResponseBuilder {
    details: Option<Value>,
}

impl JsonResponse {
    pub fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}

impl JsonResponseBuilder {
    pub fn set_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn to_response(self, status: StatusCode, error: impl Into<String>) -> HttpResponse {
        let body = self.body(status, error);
        HttpResponse::build(status).json(body)
    }

    fn body(self, status: StatusCode, error: impl Into<String>) -> JsonResponse {
        let error = error.into();
        let error = if error.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string()
        } else {
            error
        };

        JsonResponse {
            success: false,
            code: status.as_u16(),
            error,
            details: self.details,
        }
    }
}
