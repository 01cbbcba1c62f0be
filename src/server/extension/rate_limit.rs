//! Request rate limiter backed by process memory or a shared redis store.
//!
//! The in-memory backend uses governor's keyed GCRA limiter, allowing a burst of the
//! full quota and replenishing one request every `period / limit`. The redis backend
//! keeps fixed-window counters so that every process behind a load balancer draws from
//! the same quota.

use std::{num::NonZeroU32, sync::Arc, time::Duration};

use governor::{
    clock::{Clock, DefaultClock},
    DefaultKeyedRateLimiter, Quota, RateLimiter as Governor,
};
use redis::aio::ConnectionManager;

use crate::server::{
    config::rate_limit::{RateLimitSettings, RateQuota},
    error::startup::ExtensionInitError,
};

const KEY_PREFIX: &str = "hbnb:ratelimit";

/// Result of charging one request against a client's quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Throttled { retry_after: Duration },
}

#[derive(Clone)]
pub enum RateLimiter {
    Memory {
        limiter: Arc<DefaultKeyedRateLimiter<String>>,
        quota: RateQuota,
    },
    Redis {
        connection: ConnectionManager,
        quota: RateQuota,
    },
}

impl RateLimiter {
    /// Builds the limiter described by the storage URI.
    ///
    /// # Arguments
    /// - `settings` - Storage URI and quota from the resolved profile
    ///
    /// # Returns
    /// - `Ok(RateLimiter)` - In-memory or connected redis limiter
    /// - `Err(ExtensionInitError::RateLimitStorage)` - URI scheme is not supported
    /// - `Err(ExtensionInitError::RateLimitStore)` - Redis rejected the connection
    pub async fn connect(settings: &RateLimitSettings) -> Result<Self, ExtensionInitError> {
        let uri = settings.storage_uri.trim();
        let scheme = uri.split_once("://").map(|(scheme, _)| scheme);

        match scheme {
            Some("memory") => Ok(Self::memory(settings.quota)),
            Some("redis") | Some("rediss") => {
                let client =
                    redis::Client::open(uri).map_err(ExtensionInitError::RateLimitStore)?;
                let mut connection = client
                    .get_connection_manager()
                    .await
                    .map_err(ExtensionInitError::RateLimitStore)?;

                redis::cmd("PING")
                    .query_async::<_, String>(&mut connection)
                    .await
                    .map_err(ExtensionInitError::RateLimitStore)?;

                Ok(Self::Redis {
                    connection,
                    quota: settings.quota,
                })
            }
            _ => Err(ExtensionInitError::RateLimitStorage(uri.to_string())),
        }
    }

    /// Creates an in-memory limiter for a single process.
    pub fn memory(quota: RateQuota) -> Self {
        let gcra = Quota::with_period(quota.replenish_interval())
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(quota.limit);

        Self::Memory {
            limiter: Arc::new(Governor::keyed(gcra)),
            quota,
        }
    }

    pub fn quota(&self) -> RateQuota {
        match self {
            Self::Memory { quota, .. } | Self::Redis { quota, .. } => *quota,
        }
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Self::Memory { .. } => "memory",
            Self::Redis { .. } => "redis",
        }
    }

    /// Charges one request to `key`.
    ///
    /// A redis failure lets the request through and logs a warning rather than
    /// turning a store outage into an API outage.
    pub async fn check(&self, key: &str) -> Decision {
        match self {
            Self::Memory { limiter, .. } => match limiter.check_key(&key.to_string()) {
                Ok(()) => Decision::Allowed,
                Err(not_until) => Decision::Throttled {
                    retry_after: not_until.wait_time_from(DefaultClock::default().now()),
                },
            },
            Self::Redis { connection, quota } => {
                match check_fixed_window(connection.clone(), key, *quota).await {
                    Ok(decision) => decision,
                    Err(e) => {
                        tracing::warn!("Rate limit store unavailable, allowing request: {}", e);
                        Decision::Allowed
                    }
                }
            }
        }
    }

    /// Drops idle in-memory keys so the table does not grow without bound.
    pub fn sweep(&self) {
        if let Self::Memory { limiter, .. } = self {
            limiter.retain_recent();
            limiter.shrink_to_fit();
        }
    }
}

/// Counts the request in the current window, creating the window on first use.
async fn check_fixed_window(
    mut connection: ConnectionManager,
    key: &str,
    quota: RateQuota,
) -> Result<Decision, redis::RedisError> {
    let window = quota.period.as_secs().max(1);
    let key = format!("{KEY_PREFIX}:{window}:{key}");

    let (count, ttl): (u64, i64) = redis::pipe()
        .atomic()
        .cmd("SET")
        .arg(&key)
        .arg(0)
        .arg("EX")
        .arg(window)
        .arg("NX")
        .ignore()
        .incr(&key, 1)
        .ttl(&key)
        .query_async(&mut connection)
        .await?;

    if count <= u64::from(quota.limit.get()) {
        Ok(Decision::Allowed)
    } else {
        Ok(Decision::Throttled {
            retry_after: Duration::from_secs(ttl.max(1) as u64),
        })
    }
}
