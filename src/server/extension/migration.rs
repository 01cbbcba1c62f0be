use ::migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::server::error::startup::ExtensionInitError;

/// Outcome of binding the schema migrator to the persistence handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationBinding {
    /// Migrations applied during this bind.
    pub applied: usize,
    /// Migrations still waiting to be applied.
    pub pending: usize,
}

/// Binds the migrator to the connected store.
///
/// With `auto_migrate` every pending migration is applied; otherwise the pending count
/// is only reported so an operator can run them out of band.
///
/// # Arguments
/// - `db` - Connected persistence handle
/// - `auto_migrate` - Whether to apply pending migrations
///
/// # Returns
/// - `Ok(MigrationBinding)` - Applied and remaining pending counts
/// - `Err(ExtensionInitError::Migration)` - Listing or applying migrations failed
pub async fn bind(
    db: &DatabaseConnection,
    auto_migrate: bool,
) -> Result<MigrationBinding, ExtensionInitError> {
    let pending = Migrator::get_pending_migrations(db)
        .await
        .map_err(ExtensionInitError::Migration)?
        .len();

    if !auto_migrate || pending == 0 {
        if pending > 0 {
            tracing::warn!("{} database migrations are pending and AUTO_MIGRATE is off", pending);
        }
        return Ok(MigrationBinding {
            applied: 0,
            pending,
        });
    }

    Migrator::up(db, None)
        .await
        .map_err(ExtensionInitError::Migration)?;

    tracing::info!("Applied {} database migrations", pending);

    Ok(MigrationBinding {
        applied: pending,
        pending: 0,
    })
}
