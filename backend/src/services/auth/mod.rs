//! # Authentication Service
//!
//! Account signup, login and logout. There are no roles or tokens: a
//! successful login stores the user's id in a signed session cookie and
//! logout removes it.
//!
//! ## Routes
//! - `GET|POST /signup`: form page / create an account, then `303` to `/login`.
//! - `GET|POST /login`: form page / verify credentials, then `303` to `/`.
//!   Any failure answers `401` with the same generic message, whether the
//!   email is unknown or the password is wrong.
//! - `GET /logout`: clear the session, then `303` to `/`.

mod login;
mod logout;
mod password;
mod signup;

use crate::config::Config;
use crate::services::pages::page;
use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::http::header;
use actix_web::{web, HttpResponse};

/// Session key holding the logged-in user's id.
pub const USER_ID_KEY: &str = "user_id";

const SESSION_COOKIE_NAME: &str = "bloodlink_session";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/signup")
            .route(web::get().to(|| async { page("signup.html") }))
            .route(web::post().to(signup::process)),
    )
    .service(
        web::resource("/login")
            .route(web::get().to(|| async { page("login.html") }))
            .route(web::post().to(login::process)),
    )
    .route("/logout", web::get().to(logout::process));
}

/// Cookie-backed session middleware signed with the configured secret.
pub fn session_middleware(config: &Config) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), config.session_key())
        .cookie_name(SESSION_COOKIE_NAME.to_string())
        .cookie_content_security(CookieContentSecurity::Signed)
        .cookie_secure(config.secure_cookies)
        .build()
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestEnv;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    async fn signup(env: &TestEnv, username: &str, email: &str) -> StatusCode {
        let req = test::TestRequest::post()
            .uri("/signup")
            .set_form([("username", username), ("email", email), ("password", "s3cret-pass")]);
        env.call(req).await.status()
    }

    #[actix_web::test]
    async fn signup_stores_a_hashed_password_and_redirects_to_login() {
        let env = TestEnv::new();

        let req = test::TestRequest::post()
            .uri("/signup")
            .set_form([("username", "asha"), ("email", "asha@example.com"), ("password", "s3cret-pass")]);
        let resp = env.call(req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");

        let user = env
            .state
            .users
            .find_user_by_email("asha@example.com")
            .unwrap()
            .unwrap();
        assert_ne!(user.password_hash, "s3cret-pass");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[actix_web::test]
    async fn duplicate_signup_is_a_conflict() {
        let env = TestEnv::new();
        assert_eq!(signup(&env, "asha", "asha@example.com").await, StatusCode::SEE_OTHER);
        assert_eq!(signup(&env, "asha2", "asha@example.com").await, StatusCode::CONFLICT);
        assert_eq!(signup(&env, "asha", "other@example.com").await, StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn signup_requires_every_field() {
        let env = TestEnv::new();
        let req = test::TestRequest::post()
            .uri("/signup")
            .set_form([("username", "asha"), ("email", " ")]);
        let resp = env.call(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn login_sets_the_session_and_failures_are_generic() {
        let env = TestEnv::new();
        signup(&env, "asha", "asha@example.com").await;

        let ok = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "asha@example.com"), ("password", "s3cret-pass")]);
        let resp = env.call(ok).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        assert!(resp
            .response()
            .cookies()
            .any(|c| c.name() == "bloodlink_session"));

        let wrong_password = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "asha@example.com"), ("password", "nope")]);
        let resp = env.call(wrong_password).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let wrong_password_body: serde_json::Value = test::read_body_json(resp).await;

        let unknown_email = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ghost@example.com"), ("password", "s3cret-pass")]);
        let resp = env.call(unknown_email).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let unknown_email_body: serde_json::Value = test::read_body_json(resp).await;

        assert_eq!(wrong_password_body, unknown_email_body);
        assert_eq!(wrong_password_body["error"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn logout_redirects_home() {
        let env = TestEnv::new();
        let resp = env.call(test::TestRequest::get().uri("/logout")).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[actix_web::test]
    async fn logout_clears_the_logged_in_user() {
        let env = TestEnv::new();
        signup(&env, "asha", "asha@example.com").await;

        let login = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "asha@example.com"), ("password", "s3cret-pass")]);
        let resp = env.call(login).await;
        let session = resp
            .response()
            .cookies()
            .find(|c| c.name() == "bloodlink_session")
            .unwrap()
            .into_owned();
        assert!(session.value().contains("user_id"));

        let logout = test::TestRequest::get().uri("/logout").cookie(session);
        let resp = env.call(logout).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == "bloodlink_session")
            .unwrap()
            .into_owned();
        assert!(!cleared.value().contains("user_id"));
    }

    #[actix_web::test]
    async fn form_pages_are_served() {
        let env = TestEnv::new();
        for uri in ["/signup", "/login"] {
            let resp = env.call(test::TestRequest::get().uri(uri)).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        }
    }
}
