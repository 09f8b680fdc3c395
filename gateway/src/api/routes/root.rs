//! Greeting endpoints

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of the greeting endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub const ROOT_MESSAGE: &str = "Hello from FastAPI Backend!";
pub const HELLO_MESSAGE: &str = "Hello from the backend API!";

/// Configure greeting routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/").route(web::get().to(read_root)))
        .service(super::resource("/api/hello").route(web::get().to(hello)));
}

/// Service root
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "general"
)]
pub async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse { message: ROOT_MESSAGE })
}

/// API greeting
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "general"
)]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse { message: HELLO_MESSAGE })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{
        http::StatusCode,
        test::{call_service, init_service, read_body_json, TestRequest},
        App,
    };
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_root_and_hello() {
        let app = init_service(App::new().configure(configure)).await;

        let resp = call_service(&app, TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"message": ROOT_MESSAGE}));

        let resp = call_service(&app, TestRequest::get().uri("/api/hello").to_request()).await;
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"message": HELLO_MESSAGE}));
    }
}
