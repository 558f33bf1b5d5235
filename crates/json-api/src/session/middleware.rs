//! Session cookie middleware.

use std::sync::Arc;

use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::*,
};
use storefront_app::session::SessionId;
use tracing::debug;

use crate::{extensions::*, state::State};

/// Longest cookie value accepted as a session id.
const MAX_SESSION_ID_LEN: usize = 64;

/// Attach the caller's session to the depot, starting a new one if needed.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let cookie_name = match depot.obtain::<Arc<State>>() {
        Ok(state) => state.session_cookie.clone(),
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let existing = req
        .cookie(&cookie_name)
        .map(Cookie::value)
        .filter(|value| is_valid_session_id(value))
        .map(SessionId::from);

    let session = match existing {
        Some(session) => session,
        None => {
            let session = SessionId::generate();

            debug!(%session, "starting new session");

            res.add_cookie(
                Cookie::build((cookie_name, session.to_string()))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .build(),
            );

            session
        }
    };

    depot.insert_session_id(session);

    ctrl.call_next(req, depot, res).await;
}

fn is_valid_session_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_SESSION_ID_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
