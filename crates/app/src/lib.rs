//! Storefront domain, persistence and checkout engine.

pub mod context;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ids;
pub mod session;

#[cfg(test)]
mod test;
