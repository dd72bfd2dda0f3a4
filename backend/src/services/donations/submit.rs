//! # Blood Donation Submission
//!
//! Handles `POST /donate`.
//!
//! ## Workflow
//!
//! 1.  **Validate**: name, phone and blood type must be present; age and
//!     weight must be whole numbers. A bad value is a `400` naming the
//!     field, and nothing is stored.
//! 2.  **Insert**: one row goes into the donation store.
//! 3.  **Track**: the tracking table is searched on the blocking pool for
//!     the first donor with the same blood group. A match, no match and an
//!     unreadable table are all normal outcomes reported in the response.

use crate::error::AppError;
use crate::matching::find_tracked_donor;
use crate::services::run_blocking;
use crate::services::validation::{optional, optional_text, required, whole_number};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::blood_donation::NewBloodDonation;
use common::requests::DonationForm;
use common::responses::{DonationResponse, TrackingOutcome};
use log::{info, warn};

pub(crate) async fn process(
    state: web::Data<AppState>,
    form: web::Form<DonationForm>,
) -> impl Responder {
    match submit_donation(&state, form.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.error_response(),
    }
}

fn validate_donation(form: DonationForm) -> Result<NewBloodDonation, AppError> {
    Ok(NewBloodDonation {
        name: required("Name", &form.name)?,
        gender: optional(&form.gender),
        email: optional(&form.email),
        phone: required("Phone", &form.phone)?,
        blood_type: required("Blood type", &form.blood_type)?,
        age: whole_number("Age", &form.age)?,
        weight: whole_number("Weight", &form.weight)?,
        medical_conditions: optional_text(&form.medical_conditions),
    })
}

async fn submit_donation(state: &AppState, form: DonationForm) -> Result<DonationResponse, AppError> {
    let donation = validate_donation(form)?;
    let blood_type = donation.blood_type.clone();

    let store = state.donations.clone();
    let donation_id = run_blocking(move || store.insert_donation(&donation)).await?;
    info!("Stored blood donation #{}", donation_id);

    let tracking_path = state.config.donor_tracking_path.clone();
    let lookup = run_blocking(move || Ok(find_tracked_donor(&tracking_path, &blood_type))).await?;

    let tracking = match lookup {
        Ok(Some(donor)) => TrackingOutcome::Found(donor),
        Ok(None) => TrackingOutcome::NoMatch,
        Err(e) => {
            warn!("Donor tracking unavailable for donation #{}: {}", donation_id, e);
            TrackingOutcome::Unavailable {
                reason: e.to_string(),
            }
        }
    };

    Ok(DonationResponse {
        donation_id,
        tracking,
    })
}
