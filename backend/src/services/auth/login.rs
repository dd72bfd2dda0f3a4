use super::password::verify_password;
use super::{redirect_to, USER_ID_KEY};
use crate::error::AppError;
use crate::services::run_blocking;
use crate::state::AppState;
use actix_session::Session;
use actix_web::{web, Responder, ResponseError};
use common::requests::LoginForm;
use log::info;

/// `POST /login`
pub(crate) async fn process(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let user_id = match authenticate(&state, form.into_inner()).await {
        Ok(user_id) => user_id,
        Err(AppError::InvalidCredentials) => {
            info!("Rejected login attempt");
            return AppError::InvalidCredentials.error_response();
        }
        Err(e) => return e.error_response(),
    };

    // Fresh session id on privilege change.
    session.renew();
    if let Err(e) = session.insert(USER_ID_KEY, user_id) {
        return AppError::Internal(format!("Failed to store session: {}", e)).error_response();
    }

    info!("User #{} logged in", user_id);
    redirect_to("/")
}

/// Resolves the user id for a valid email/password pair.
///
/// Unknown email and wrong password both end in `InvalidCredentials`.
async fn authenticate(state: &AppState, form: LoginForm) -> Result<i64, AppError> {
    let email = form.email.trim().to_string();
    let password = form.password;
    let users = state.users.clone();

    run_blocking(move || match users.find_user_by_email(&email)? {
        Some(user) if verify_password(&password, &user.password_hash) => Ok(user.id),
        _ => Err(AppError::InvalidCredentials),
    })
    .await
}
