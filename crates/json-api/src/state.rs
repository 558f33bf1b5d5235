//! State

use std::sync::Arc;

use storefront_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Name of the cookie carrying the cart session.
    pub(crate) session_cookie: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, session_cookie: String) -> Self {
        Self {
            app,
            session_cookie,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, session_cookie: String) -> Arc<Self> {
        Arc::new(Self::new(app, session_cookie))
    }
}
