use actix_web::{get, http::header, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{GenerateQuestionSetRequest, ProvidersResponse, StoredQuestionSet},
    services::export_service::{format_report, report_file_name},
};

#[get("/api/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/api/providers")]
async fn providers() -> HttpResponse {
    HttpResponse::Ok().json(ProvidersResponse::catalog())
}

#[post("/api/question-sets")]
async fn generate_question_set(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionSetRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let default_key = state.config.api_key_for(request.provider).cloned();

    let question_set = state
        .generation_service
        .generate(request, default_key)
        .await?;

    // The slot is only written here, after a fully validated result.
    let stored = StoredQuestionSet::new(question_set);
    *state.last_result.write().await = Some(stored.clone());

    Ok(HttpResponse::Created().json(stored))
}

#[get("/api/question-sets/latest")]
async fn latest_question_set(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let guard = state.last_result.read().await;
    let stored = guard
        .as_ref()
        .ok_or_else(|| AppError::NotFound("no question set has been generated yet".to_string()))?;

    Ok(HttpResponse::Ok().json(stored))
}

#[get("/api/question-sets/latest/export")]
async fn export_latest_question_set(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let guard = state.last_result.read().await;
    let stored = guard
        .as_ref()
        .ok_or_else(|| AppError::NotFound("no question set has been generated yet".to_string()))?;

    let report = format_report(&stored.question_set);
    let file_name = report_file_name(&stored.question_set);

    Ok(HttpResponse::Ok()
        .insert_header(header::ContentDisposition {
            disposition: header::DispositionType::Attachment,
            parameters: vec![header::DispositionParam::Filename(file_name)],
        })
        .content_type("text/plain; charset=utf-8")
        .body(report))
}
