use actix_web::{HttpRequest, HttpResponse};

use crate::models::response::ErrorResponse;

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        details: Some(req.path().to_string()),
    })
}
