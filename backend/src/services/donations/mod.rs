//! # Blood Donation Service
//!
//! ## Routes
//! - `GET /donate`: the donation form.
//! - `POST /donate`: urlencoded submission. Age and weight are validated
//!   as whole numbers before the record is inserted; afterwards the
//!   tracking table is searched for one donor of the same blood group.
//!   Responds with a `DonationResponse`.
//! - `GET /blood_donations`: every stored donation, oldest first.

mod list;
mod submit;

use crate::services::pages::page;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/donate")
            .route(web::get().to(|| async { page("donate.html") }))
            .route(web::post().to(submit::process)),
    )
    .route("/blood_donations", web::get().to(list::process));
}
