//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use storefront_app::session::SessionId;

/// Helpers for reading request-scoped values out of the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session_id(&mut self, session: SessionId);

    /// The session attached by the session middleware.
    fn session_id_or_500(&self) -> Result<SessionId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session_id(&mut self, session: SessionId) {
        self.inject(session);
    }

    fn session_id_or_500(&self) -> Result<SessionId, StatusError> {
        self.obtain_or_500::<SessionId>().cloned()
    }
}
