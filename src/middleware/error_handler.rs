use actix_web::{error::JsonPayloadError, web, Error, HttpRequest};

use crate::core::AppError;

/// Turn JSON body extraction failures into the application error shape
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected request payload"
    );

    AppError::payload(err.to_string()).into()
}

/// JSON extractor configuration shared by every collection route
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
