use super::password::hash_password;
use super::redirect_to;
use crate::error::AppError;
use crate::services::run_blocking;
use crate::services::validation::required;
use crate::state::AppState;
use actix_web::{web, Responder, ResponseError};
use common::requests::SignupForm;
use log::info;

/// `POST /signup`
pub(crate) async fn process(
    state: web::Data<AppState>,
    form: web::Form<SignupForm>,
) -> impl Responder {
    match register(&state, form.into_inner()).await {
        Ok(user_id) => {
            info!("Registered user #{}", user_id);
            redirect_to("/login")
        }
        Err(e) => e.error_response(),
    }
}

async fn register(state: &AppState, form: SignupForm) -> Result<i64, AppError> {
    let username = required("Username", &form.username)?;
    let email = required("Email", &form.email)?;
    // Passwords are taken verbatim, whitespace included.
    if form.password.is_empty() {
        return Err(AppError::validation("Password is required"));
    }

    let password = form.password;
    let password_hash = run_blocking(move || hash_password(&password)).await?;

    let users = state.users.clone();
    run_blocking(move || users.insert_user(&username, &email, &password_hash)).await
}

