use super::{redirect_to, USER_ID_KEY};
use actix_session::Session;
use actix_web::Responder;

/// `GET /logout`
pub(crate) async fn process(session: Session) -> impl Responder {
    session.remove(USER_ID_KEY);
    redirect_to("/")
}
