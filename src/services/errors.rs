use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    /// Missing or malformed input. Carries field level detail for the caller.
    #[error("validation error: {details}")]
    Validation { details: Value },
    /// A comparison came out non-finite. Validated input never gets here.
    #[error("computation error: {0}")]
    Computation(String),
}

impl BenchmarkError {
    pub fn validation(details: Value) -> Self {
        Self::Validation { details }
    }
}

impl From<serde_valid::validation::Errors> for BenchmarkError {
    fn from(errors: serde_valid::validation::Errors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!(errors.to_string()));
        Self::validation(details)
    }
}

impl ResponseError for BenchmarkError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Computation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation { details } => JsonResponse::build()
                .set_details(details.clone())
                .to_response(self.status_code(), "Validation error"),
            Self::Computation(_) => {
                JsonResponse::build().to_response(self.status_code(), "Internal server error")
            }
        }
    }
}
