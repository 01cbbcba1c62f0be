//! Rate limit quota and storage settings.

use std::{fmt, num::NonZeroU32, str::FromStr, time::Duration};

use crate::server::{config::env::Env, error::config::ConfigError};

pub const DEFAULT_STORAGE_URI: &str = "memory://";
pub const DEFAULT_QUOTA: &str = "200 per minute";

/// Number of requests a client may make per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateQuota {
    pub limit: NonZeroU32,
    pub period: Duration,
}

impl RateQuota {
    /// Spacing between requests that replenishes one unit of quota.
    pub fn replenish_interval(&self) -> Duration {
        self.period / self.limit.get()
    }
}

/// Parses quotas written as `"<n> per <unit>"` or `"<n>/<unit>"`.
///
/// Units are `second`, `minute`, `hour` or `day`, singular or plural.
impl FromStr for RateQuota {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (count, unit) = s
            .split_once(" per ")
            .or_else(|| s.split_once('/'))
            .ok_or_else(|| "expected '<n> per <second|minute|hour|day>'".to_string())?;

        let limit = count
            .trim()
            .parse::<NonZeroU32>()
            .map_err(|e| format!("invalid request count: {e}"))?;

        let seconds = match unit.trim().to_ascii_lowercase().trim_end_matches('s') {
            "second" => 1,
            "minute" => 60,
            "hour" => 60 * 60,
            "day" => 24 * 60 * 60,
            other => return Err(format!("unknown period '{other}'")),
        };

        Ok(Self {
            limit,
            period: Duration::from_secs(seconds),
        })
    }
}

impl fmt::Display for RateQuota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.period.as_secs() {
            1 => "second",
            60 => "minute",
            3600 => "hour",
            86400 => "day",
            _ => return write!(f, "{} per {}s", self.limit, self.period.as_secs()),
        };
        write!(f, "{} per {}", self.limit, unit)
    }
}

/// Where rate limit counters live and how much each client may consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// `memory://`, `redis://` or `rediss://` URI; validated when the limiter is built.
    pub storage_uri: String,
    pub quota: RateQuota,
    /// Key clients by `X-Forwarded-For`/`X-Real-IP`; only safe behind a proxy that
    /// overwrites them.
    pub trust_proxy: bool,
}

impl RateLimitSettings {
    /// Reads `RATELIMIT_DEFAULT` and `RATELIMIT_TRUST_PROXY`, and takes the
    /// already-resolved storage URI.
    pub fn from_env(env: &Env, storage_uri: String) -> Result<Self, ConfigError> {
        let raw = env.non_empty("RATELIMIT_DEFAULT").unwrap_or(DEFAULT_QUOTA);
        let quota = raw
            .parse::<RateQuota>()
            .map_err(|reason| ConfigError::InvalidValue {
                key: "RATELIMIT_DEFAULT",
                value: raw.to_string(),
                reason,
            })?;

        Ok(Self {
            storage_uri,
            quota,
            trust_proxy: env.flag_or("RATELIMIT_TRUST_PROXY", false)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_quota_spellings() {
        let quota: RateQuota = "200 per minute".parse().unwrap();
        assert_eq!(quota.limit.get(), 200);
        assert_eq!(quota.period, Duration::from_secs(60));

        let quota: RateQuota = "5/seconds".parse().unwrap();
        assert_eq!(quota.limit.get(), 5);
        assert_eq!(quota.period, Duration::from_secs(1));
    }

    #[test]
    fn rejects_zero_and_unknown_units() {
        assert!("0 per minute".parse::<RateQuota>().is_err());
        assert!("10 per fortnight".parse::<RateQuota>().is_err());
        assert!("ten".parse::<RateQuota>().is_err());
    }

    #[test]
    fn replenish_interval_spreads_the_period() {
        let quota: RateQuota = "4 per minute".parse().unwrap();
        assert_eq!(quota.replenish_interval(), Duration::from_secs(15));
        assert_eq!(quota.to_string(), "4 per minute");
    }

    #[test]
    fn invalid_default_is_a_config_error() {
        let env = Env::from_pairs([("RATELIMIT_DEFAULT", "lots")]);
        let err = RateLimitSettings::from_env(&env, DEFAULT_STORAGE_URI.to_string()).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "RATELIMIT_DEFAULT", .. }
        ));
    }

    /// Expected: proxy headers are ignored unless explicitly trusted
    #[test]
    fn proxy_trust_is_opt_in() {
        let env = Env::default();
        let settings = RateLimitSettings::from_env(&env, DEFAULT_STORAGE_URI.to_string()).unwrap();
        assert!(!settings.trust_proxy);

        let env = Env::from_pairs([("RATELIMIT_TRUST_PROXY", "true")]);
        let settings = RateLimitSettings::from_env(&env, DEFAULT_STORAGE_URI.to_string()).unwrap();
        assert!(settings.trust_proxy);
    }
}
