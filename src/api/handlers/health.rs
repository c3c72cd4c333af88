use actix_web::{http::header, web, HttpResponse};

use crate::core::HealthReporter;

pub async fn health(reporter: web::Data<HealthReporter>) -> HttpResponse {
    let outcome = reporter.get_health();

    HttpResponse::build(outcome.status_code())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(outcome.into_report())
}
