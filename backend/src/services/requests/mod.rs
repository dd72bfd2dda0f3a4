//! # Blood Request Service
//!
//! ## Routes
//! - `GET /contact`: the request form.
//! - `POST /contact`: `multipart/form-data` submission. The request is
//!   validated, its optional ID proof stored under a server-generated name,
//!   the record inserted, and the donor directory searched for compatible
//!   donors. Responds with a `MatchingResponse`.
//! - `GET /blood_requests`: every stored request, oldest first.
//!
//! The directory search is enrichment only. When the directory cannot be
//! read the request still succeeds with no donors and an `unavailable`
//! directory status.

mod list;
mod submit;
mod upload;

use crate::services::pages::page;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::get().to(|| async { page("contact.html") }))
            .route(web::post().to(submit::process)),
    )
    .route("/blood_requests", web::get().to(list::process));
}
