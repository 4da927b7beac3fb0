use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    web, Error, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::middleware::request_id::request_id_of;

/// Middleware that logs every error response on its way out
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        let request_id = request_id_of(res.request());
                        log_error(res.status(), err, request_id.as_deref());
                    }
                }
                Err(err) => tracing::error!("Request error: {:?}", err),
            }

            result
        })
    }
}

/// Log a handler error at a level matching its status class
pub fn log_error(status: StatusCode, err: &Error, request_id: Option<&str>) {
    let request_id = request_id.unwrap_or("-");

    if status.is_server_error() {
        tracing::error!(status = %status, request_id, "Request failed: {}", err);
    } else {
        tracing::warn!(status = %status, request_id, "Request rejected: {}", err);
    }
}

/// Helper function to create standardized error responses
pub fn error_response(status_code: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({
        "error": {
            "code": status_code.as_u16(),
            "message": message,
        }
    }))
}

/// Answer malformed JSON bodies in the standard error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid JSON body: {}", err),
    );
    InternalError::from_response(err, response).into()
}

/// Answer unparsable path segments (e.g. non-numeric ids) in the standard error shape
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    let response = error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid path: {}", err),
    );
    InternalError::from_response(err, response).into()
}

/// Register the extractor error handlers on an app or scope
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}
