use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, error};
use serde::Serialize;

use crate::services::ServiceError;

pub mod customers;
pub mod orders;
pub mod products;

/// JSON body used for every error the API reports with a single message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Translate a service failure into the API error contract: 400 for
/// anything the caller can fix, 500 (logged, body-less) for the rest.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => HttpResponse::BadRequest().json(errors),
        ServiceError::NotFound(message) | ServiceError::Conflict(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Keep malformed JSON bodies inside the structured 400 contract instead
/// of actix's default plain-text error page.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = err.to_string();
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse::new(message)),
    )
    .into()
}
