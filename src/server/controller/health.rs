use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::health::{ComponentStatus, HealthDto},
    server::{error::health::DependencyUnavailable, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Upper bound on the database round trip of one probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health))
}

/// GET /health - Report process and database health
///
/// Always answers 200 so load balancers can tell a live process with a failing
/// database apart from a dead one. The database is probed on every call.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    security(()),
    responses(
        (status = 200, description = "Process is up; database status reported in the body", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match probe_database(&state.db, PROBE_TIMEOUT).await {
        Ok(()) => ComponentStatus::Healthy,
        Err(e) => {
            tracing::warn!("Health probe: {}", e);
            ComponentStatus::Unhealthy
        }
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            status: ComponentStatus::Healthy,
            database,
        }),
    )
}

/// Runs `SELECT 1` against the store, bounded by `timeout`.
///
/// # Returns
/// - `Ok(())` - Database answered
/// - `Err(DependencyUnavailable::Timeout)` - No answer within `timeout`
/// - `Err(DependencyUnavailable::Query)` - Query failed
pub async fn probe_database(
    db: &DatabaseConnection,
    timeout: Duration,
) -> Result<(), DependencyUnavailable> {
    tokio::time::timeout(timeout, db.execute_unprepared("SELECT 1"))
        .await
        .map_err(|_| DependencyUnavailable::Timeout(timeout))??;

    Ok(())
}
