use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

/// Body of `GET /health`.
///
/// `status` describes the process itself and is always `healthy` when a response is
/// produced at all; `database` reflects the outcome of a probe query.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct HealthDto {
    pub status: ComponentStatus,
    pub database: ComponentStatus,
}
