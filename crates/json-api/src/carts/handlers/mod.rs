//! Cart Handlers

pub(crate) mod add;
pub(crate) mod checkout;
pub(crate) mod clear;
pub(crate) mod get;
pub(crate) mod remove;
pub(crate) mod update;
