//! Server configuration module

use clap::Parser;

use crate::config::{
    checkout::CheckoutConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    session::SessionConfig,
};

pub(crate) mod checkout;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod session;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Checkout transaction limits.
    #[command(flatten)]
    pub checkout: CheckoutConfig,

    /// Cart session settings.
    #[command(flatten)]
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_database_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
        ])?;

        let timeouts = config.checkout.timeouts();

        assert_eq!(timeouts.lock_timeout, Duration::from_millis(2_000));
        assert_eq!(timeouts.statement_timeout, Duration::from_millis(5_000));
        assert_eq!(timeouts.overall, Duration::from_millis(10_000));
        assert_eq!(config.session.idle_timeout(), Duration::from_secs(1_800));
        assert_eq!(config.session.cookie_name, "storefront_session");

        Ok(())
    }

    #[test]
    fn checkout_limits_can_be_overridden() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--checkout-lock-timeout-ms",
            "250",
            "--checkout-timeout-ms",
            "3000",
        ])?;

        let timeouts = config.checkout.timeouts();

        assert_eq!(timeouts.lock_timeout, Duration::from_millis(250));
        assert_eq!(timeouts.overall, Duration::from_secs(3));

        Ok(())
    }
}
