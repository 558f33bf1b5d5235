//! Database connection management

use std::time::Duration;

use sqlx::{PgPool, Postgres, Transaction, postgres::PgPoolOptions, query};

/// SQL used to scope a setting to the current transaction.
pub const SET_LOCAL_SQL: &str = "SELECT set_config($1, $2, true)";

/// Timeouts applied to every checkout transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTimeouts {
    /// Longest wait for a product row lock before giving up.
    pub lock_timeout: Duration,

    /// Longest any single statement inside the checkout may run.
    pub statement_timeout: Duration,

    /// Upper bound on a checkout up to its commit, including session reads.
    pub overall: Duration,
}

impl Default for CheckoutTimeouts {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(2),
            statement_timeout: Duration::from_secs(5),
            overall: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a plain read-committed transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or `BEGIN` fails.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction with checkout lock and statement timeouts applied.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or applying a timeout fails.
    pub async fn begin_checkout_transaction(
        &self,
        timeouts: &CheckoutTimeouts,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        for (setting, value) in [
            ("lock_timeout", timeouts.lock_timeout),
            ("statement_timeout", timeouts.statement_timeout),
        ] {
            query(SET_LOCAL_SQL)
                .bind(setting)
                .bind(format!("{}ms", value.as_millis()))
                .execute(&mut *tx)
                .await?;
        }

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Apply pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
