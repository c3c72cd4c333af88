use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(handlers::health::health))
        .default_service(web::to(handlers::not_found::not_found));
}
