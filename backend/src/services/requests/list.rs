use crate::services::run_blocking;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};

/// `GET /blood_requests`
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let requests = state.requests.clone();
    match run_blocking(move || requests.list_requests()).await {
        Ok(requests) => HttpResponse::Ok().json(requests),
        Err(e) => e.error_response(),
    }
}
