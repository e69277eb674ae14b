pub mod page_handler;
pub mod question_set_handler;

use actix_web::web;

/// Registers every route. Shared by `main` and the integration tests so
/// both always exercise the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page_handler::index)
        .service(question_set_handler::health)
        .service(question_set_handler::providers)
        .service(question_set_handler::generate_question_set)
        .service(question_set_handler::latest_question_set)
        .service(question_set_handler::export_latest_question_set);
}
