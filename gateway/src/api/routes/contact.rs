//! Contact form endpoint

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::api::middleware::logging::get_request_id;
use crate::api::{ApiError, GatewayData, Result};

/// Collection receiving contact submissions
pub const CONTACT_COLLECTION: &str = "contact_messages";

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Receipt returned for every accepted submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactReceipt {
    pub status: String,
    /// Whether a document store kept the submission
    pub stored: bool,
    /// Stored document id
    pub id: Option<String>,
}

impl ContactForm {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::Unprocessable(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Configure contact routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/api/contact").route(web::post().to(submit_contact)));
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Submission accepted", body = ContactReceipt),
        (status = 422, description = "Invalid submission", body = crate::api::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    req: HttpRequest,
    state: GatewayData,
    form: web::Json<ContactForm>,
) -> Result<HttpResponse> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let form = form.into_inner();
    form.validate()?;

    let id = match state.store() {
        Some(store) => {
            let document = json!({
                "name": form.name,
                "email": form.email,
                "message": form.message,
                "created_at": Utc::now().to_rfc3339(),
            });
            let id = store.insert(CONTACT_COLLECTION, document)?;
            info!(
                "Request {} - stored contact message {} in '{}'",
                request_id,
                id,
                store.name()
            );
            Some(id)
        }
        None => {
            info!(
                "Request {} - contact message received, no document store configured",
                request_id
            );
            None
        }
    };

    Ok(HttpResponse::Ok().json(ContactReceipt {
        status: "ok".to_string(),
        stored: id.is_some(),
        id,
    }))
}
