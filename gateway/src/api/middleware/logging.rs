//! API logging middleware
//!
//! Tags every request with a unique id, returns it in the `X-Request-Id`
//! header and logs the outcome with its latency.

use actix_service::{Service, Transform};
use actix_web::{
    dev::{forward_ready, ServiceRequest, ServiceResponse},
    http::header::{self, HeaderName, HeaderValue},
    Error, HttpMessage,
};
use futures::future::{ready, Ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// API logger middleware
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiLogger;

impl ApiLogger {
    /// Create a new logging middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ApiLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiLoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// API logger middleware service
pub struct ApiLoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ApiLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future =
        std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start_time = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let peer_addr = req
            .connection_info()
            .peer_addr()
            .unwrap_or("unknown")
            .to_owned();
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_owned();

        let request_id = Uuid::new_v4().to_string();
        let service = self.service.clone();

        Box::pin(async move {
            req.extensions_mut().insert(RequestId(request_id.clone()));

            debug!(
                "Request {} - {} {} - From {} - UA: {}",
                request_id, method, path, peer_addr, user_agent
            );

            let result = service.call(req).await;
            let elapsed = start_time.elapsed();

            match result {
                Ok(mut res) => {
                    info!(
                        "Response {} - {} {} - Status {} - Completed in {:?}",
                        request_id,
                        method,
                        path,
                        res.status().as_u16(),
                        elapsed
                    );
                    if let Ok(value) = HeaderValue::from_str(&request_id) {
                        res.headers_mut()
                            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                    }
                    Ok(res)
                }
                Err(e) => {
                    error!(
                        "Response {} - {} {} - Error: {} - Completed in {:?}",
                        request_id, method, path, e, elapsed
                    );
                    Err(e)
                }
            }
        })
    }
}

/// Request ID extraction helper for handlers
pub fn get_request_id(req: &actix_web::HttpRequest) -> Option<String> {
    req.extensions().get::<RequestId>().map(|id| id.0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{
        http::StatusCode,
        test::{call_service, init_service, read_body, TestRequest},
        web, App, HttpResponse,
    };

    async fn echo_request_id(req: actix_web::HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(get_request_id(&req).unwrap_or_default())
    }

    async fn error_handler() -> HttpResponse {
        HttpResponse::InternalServerError().finish()
    }

    #[actix_web::test]
    async fn test_request_id_header_matches_extension() {
        let app = init_service(
            App::new()
                .wrap(ApiLogger::new())
                .route("/", web::get().to(echo_request_id)),
        )
        .await;

        let req = TestRequest::get()
            .uri("/")
            .insert_header((header::USER_AGENT, "test-agent"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let header_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::to_owned)
            .expect("request id header");
        let body = read_body(resp).await;
        assert_eq!(header_id.as_bytes(), &body[..]);
        assert!(Uuid::parse_str(&header_id).is_ok());
    }

    #[actix_web::test]
    async fn test_error_responses_still_tagged() {
        let app = init_service(
            App::new()
                .wrap(ApiLogger::new())
                .route("/error", web::get().to(error_handler)),
        )
        .await;

        let resp = call_service(&app, TestRequest::get().uri("/error").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    }
}
