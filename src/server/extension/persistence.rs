use sea_orm::{
    sqlx::mysql::MySqlSslMode, ConnectOptions, Database, DatabaseConnection,
};

use crate::server::{
    config::database::{redact, DatabaseSettings, SslPolicy},
    error::startup::ExtensionInitError,
};

/// Opens the connection pool and verifies the store is reachable.
///
/// Applies the pool size and timeouts from the profile and, when the profile requires
/// it, enforces TLS through the MySQL driver options instead of the connection string.
///
/// # Arguments
/// - `settings` - Database settings from the resolved profile
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool that answered a ping
/// - `Err(ExtensionInitError::Persistence)` - Connection or ping failed
pub async fn connect(settings: &DatabaseSettings) -> Result<DatabaseConnection, ExtensionInitError> {
    let mut opt = ConnectOptions::new(settings.url.clone());
    opt.max_connections(settings.pool.max_connections)
        .min_connections(1)
        .connect_timeout(settings.pool.connect_timeout)
        .acquire_timeout(settings.pool.acquire_timeout)
        .sqlx_logging(false);

    match settings.ssl {
        SslPolicy::Required => {
            opt.map_sqlx_mysql_opts(|o| o.ssl_mode(MySqlSslMode::Required));
        }
        SslPolicy::Disabled => {}
    }

    let db = Database::connect(opt)
        .await
        .map_err(ExtensionInitError::Persistence)?;
    db.ping().await.map_err(ExtensionInitError::Persistence)?;

    tracing::info!(
        "Connected to database {} (pool size {})",
        redact(&settings.url),
        settings.pool.max_connections
    );

    Ok(db)
}
