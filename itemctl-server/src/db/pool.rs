//! Store gateway - the one connection pool shared by every request
//!
//! Opened once at startup (with a liveness ping), closed once at shutdown.

use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Where the store lives and how to log in.
///
/// A full `url` takes precedence over the discrete fields.
#[derive(Clone)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: Option<String>,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            database: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl StoreConfig {
    /// Build driver connect options.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` does not parse, or if neither `url` nor
    /// `database` is set.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }

        let database = self.database.as_deref().ok_or_else(|| {
            sqlx::Error::Configuration("database name is not set (DB_NAME or DATABASE_URL)".into())
        })?;

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(database);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

/// Owner of the shared pool handle.
#[derive(Debug, Clone)]
pub struct StoreGateway {
    pool: PgPool,
}

impl StoreGateway {
    /// Open the pool and verify the store answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the pool cannot
    /// connect, or the liveness ping fails.
    pub async fn open(config: &StoreConfig) -> Result<Self, sqlx::Error> {
        let options = config.connect_options()?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        let gateway = Self { pool };
        gateway.ping().await?;
        tracing::info!(
            max_connections = config.max_connections,
            "database pool opened"
        );
        Ok(gateway)
    }

    /// Wrap an existing pool (tests, embedding).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Liveness check: acquire one connection and ping it.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    /// The shared pool handle.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every connection. Waits for checked-out connections to return.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
