//! # Blood Request Submission
//!
//! Handles `POST /contact`.
//!
//! ## Workflow
//!
//! 1.  **Read**: all multipart parts are read; the ID proof is buffered in
//!     memory up to the configured limit.
//! 2.  **Validate**: required fields and the client file name are checked
//!     before anything is written.
//! 3.  **Store the upload**: the ID proof is written under a generated name.
//! 4.  **Insert**: one row goes into the request store. If the insert fails
//!     the file written in step 3 is removed again.
//! 5.  **Match**: the requested type is normalized, its compatibility set
//!     looked up, and the donor directory scanned on the blocking pool.
//!     A directory failure is logged and reported as `unavailable`; it
//!     never fails the request.

use super::upload::{check_filename, read_form, store_upload, FormParts};
use crate::error::AppError;
use crate::matching::{donor_types_for, find_compatible_donors, normalize_blood_type};
use crate::services::run_blocking;
use crate::services::validation::{optional, required};
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::blood_request::NewBloodRequest;
use common::responses::{DirectoryStatus, MatchingResponse};
use log::{error, info, warn};
use std::fs;

pub(crate) async fn process(state: web::Data<AppState>, payload: Multipart) -> impl Responder {
    match submit_request(&state, payload).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.error_response(),
    }
}

/// Builds the record from the form's text fields.
fn validate_request(parts: &FormParts) -> Result<NewBloodRequest, AppError> {
    Ok(NewBloodRequest {
        name: required("Name", parts.field("fname"))?,
        gender: optional(parts.field("gender")),
        email: optional(parts.field("femail")),
        phone: required("Phone", parts.field("fphone"))?,
        blood_type: required("Blood type", parts.field("ftype"))?,
        address: optional(parts.field("fdetails")),
        ..NewBloodRequest::default()
    })
}

async fn submit_request(state: &AppState, payload: Multipart) -> Result<MatchingResponse, AppError> {
    let mut parts = read_form(payload, state.config.max_upload_bytes).await?;
    let mut request = validate_request(&parts)?;
    if let Some(file) = &parts.file {
        check_filename(&file.filename)?;
    }

    // Store the ID proof only once the form is known to be valid.
    let stored = match parts.file.take() {
        Some(file) => {
            let upload_dir = state.config.upload_dir.clone();
            Some(run_blocking(move || store_upload(&upload_dir, file)).await?)
        }
        None => None,
    };
    let stored_path = stored.as_ref().map(|s| s.path.clone());
    if let Some(stored) = stored {
        request.id_proof = Some(stored.path.to_string_lossy().into_owned());
        request.id_proof_name = Some(stored.original_name);
        request.id_proof_md5 = Some(stored.md5);
    }

    let store = state.requests.clone();
    let record = request.clone();
    let request_id = match run_blocking(move || store.insert_request(&record)).await {
        Ok(id) => id,
        Err(e) => {
            if let Some(path) = stored_path {
                if let Err(remove_err) = fs::remove_file(&path) {
                    error!("Failed to remove orphaned upload {}: {}", path.display(), remove_err);
                }
            }
            return Err(e);
        }
    };
    info!("Stored blood request #{}", request_id);

    let recipient = normalize_blood_type(&request.blood_type);
    let compatible = donor_types_for(&recipient);
    let directory_path = state.config.donor_directory_path.clone();
    let lookup = run_blocking(move || Ok(find_compatible_donors(&directory_path, compatible))).await?;

    let (donors, directory) = match lookup {
        Ok(donors) => (donors, DirectoryStatus::Available),
        Err(e) => {
            warn!("Donor directory unavailable for request #{}: {}", request_id, e);
            (
                Vec::new(),
                DirectoryStatus::Unavailable {
                    reason: e.to_string(),
                },
            )
        }
    };

    Ok(MatchingResponse {
        request_id,
        recipient,
        compatible_types: compatible.iter().map(|t| t.to_string()).collect(),
        donors,
        directory,
    })
}
