use crate::services::run_blocking;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};

/// `GET /blood_donations`
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let donations = state.donations.clone();
    match run_blocking(move || donations.list_donations()).await {
        Ok(donations) => HttpResponse::Ok().json(donations),
        Err(e) => e.error_response(),
    }
}
