use std::time::Duration;

use thiserror::Error;

/// A dependency checked by the health probe did not answer.
///
/// Never returned to a client; the probe reports it as an `unhealthy` component.
#[derive(Error, Debug)]
pub enum DependencyUnavailable {
    #[error("database did not answer within {0:?}")]
    Timeout(Duration),

    #[error("database query failed: {0}")]
    Query(#[from] sea_orm::DbErr),
}
