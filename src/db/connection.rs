//! Pool construction from the startup configuration.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::DbConfig;
use crate::error::DbError;

use super::DbAccess;

/// Upper bound on pooled connections. The application is single-threaded, so
/// this mostly covers reconnects after a dropped connection.
const MAX_CONNECTIONS: u32 = 5;
/// How long an operation waits for a connection before giving up.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Open the connection pool described by `config` and verify it with a probe
/// query. Connectivity failures here are fatal to startup.
pub async fn connect(config: &DbConfig) -> Result<DbAccess, DbError> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
        .map_err(|source| DbError::Connection {
            operation: "opening the connection pool",
            source,
        })?;

    let db = DbAccess::from_pool(pool);
    db.probe().await?;
    Ok(db)
}
