//! Checkout Config

use std::time::Duration;

use clap::Args;

use storefront_app::database::CheckoutTimeouts;

/// Checkout transaction limits.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Longest wait for a product row lock, in milliseconds
    #[arg(long, env = "CHECKOUT_LOCK_TIMEOUT_MS", default_value_t = 2_000_u64)]
    pub checkout_lock_timeout_ms: u64,

    /// Longest any single checkout statement may run, in milliseconds
    #[arg(long, env = "CHECKOUT_STATEMENT_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub checkout_statement_timeout_ms: u64,

    /// Upper bound on a checkout up to its commit, in milliseconds
    #[arg(long, env = "CHECKOUT_TIMEOUT_MS", default_value_t = 10_000_u64)]
    pub checkout_timeout_ms: u64,
}

impl CheckoutConfig {
    #[must_use]
    pub fn timeouts(&self) -> CheckoutTimeouts {
        CheckoutTimeouts {
            lock_timeout: Duration::from_millis(self.checkout_lock_timeout_ms),
            statement_timeout: Duration::from_millis(self.checkout_statement_timeout_ms),
            overall: Duration::from_millis(self.checkout_timeout_ms),
        }
    }
}
