//! Test support shared by service tests.

mod context;
pub(crate) mod helpers;
pub(crate) mod memory;

pub(crate) use context::TestContext;
