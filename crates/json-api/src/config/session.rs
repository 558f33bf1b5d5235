//! Session Config

use std::time::Duration;

use clap::Args;

/// Cart session settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Seconds a session may sit idle before its cart is dropped
    #[arg(long, env = "SESSION_IDLE_TIMEOUT_SECS", default_value_t = 1_800_u64)]
    pub session_idle_timeout_secs: u64,

    /// Name of the cookie carrying the session identifier
    #[arg(
        long = "session-cookie-name",
        env = "SESSION_COOKIE_NAME",
        default_value = "storefront_session"
    )]
    pub cookie_name: String,

    /// Seconds between sweeps that evict idle sessions
    #[arg(long, env = "SESSION_SWEEP_INTERVAL_SECS", default_value_t = 60_u64)]
    pub session_sweep_interval_secs: u64,
}

impl SessionConfig {
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_secs)
    }
}
