//! HTTP handlers and the helpers they share.

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Maps a service failure to the response sent to the client.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Repository(e) => {
            log::error!("Repository failure: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Renders malformed query strings as a JSON `400 Bad Request`.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}
