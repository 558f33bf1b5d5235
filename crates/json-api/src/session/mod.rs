//! Cart sessions carried by cookie.

pub(crate) mod middleware;
pub(crate) mod sweeper;
