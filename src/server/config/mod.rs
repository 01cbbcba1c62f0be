//! Environment-based application configuration.
//!
//! A `ConfigProfile` is resolved once at startup from a [`Profile`] selector and an
//! [`Env`] snapshot. Each profile is built by its own function on top of shared
//! base defaults, so every field is always populated and the differences between
//! development, production and testing are visible in one place.

pub mod database;
pub mod env;
pub mod rate_limit;

use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use axum::http::HeaderValue;

use crate::server::{
    config::{
        database::{
            compose_from_parts, normalize_production_url, DatabaseSettings, PoolSettings,
            SslPolicy, DEFAULT_DEV_DATABASE_URL, TEST_DATABASE_URL,
        },
        env::Env,
        rate_limit::{RateLimitSettings, DEFAULT_STORAGE_URI},
    },
    error::config::ConfigError,
};

const DEV_SECRET_KEY: &str = "dev-secret-key";
const TEST_JWT_SECRET_KEY: &str = "test-secret-key";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Bcrypt cost for real deployments.
const DEFAULT_HASH_COST: u32 = 12;
/// Lowest cost bcrypt accepts; keeps test suites fast.
const TEST_HASH_COST: u32 = 4;

const DEFAULT_TOKEN_EXPIRY: Duration = Duration::from_secs(15 * 60);
const PRODUCTION_TOKEN_EXPIRY: Duration = Duration::from_secs(3600);

/// Named deployment profile selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Development,
    Production,
    Testing,
}

impl Profile {
    /// Reads the profile selector from `APP_ENV`, defaulting to development.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Selected profile
    /// - `Err(ConfigError::UnknownProfile)` - `APP_ENV` names no known profile
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        env.non_empty("APP_ENV")
            .map_or(Ok(Self::Development), |selector| selector.parse())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "testing" | "test" => Ok(Self::Testing),
            _ => Err(ConfigError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin permitted to make credentialed cross-origin API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendOrigin {
    Exact(HeaderValue),
    /// `FRONTEND_URL=*`; only honoured outside production.
    Any,
}

/// Session cookie attributes enforced in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub http_only: bool,
    /// `SameSite` cookie attribute value.
    pub same_site: &'static str,
}

/// Size-bounded rotating log file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directory: PathBuf,
    pub file_name: String,
    /// Rotate once the active file would exceed this many bytes.
    pub max_bytes: u64,
    /// Number of rotated files kept beside the active one.
    pub backup_count: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_name: "hbnb.log".to_string(),
            max_bytes: 10_000_000,
            backup_count: 10,
        }
    }
}

/// Error reporting (Sentry) settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReportingSettings {
    /// `None` disables error reporting entirely.
    pub dsn: Option<String>,
    pub environment: String,
    pub traces_sample_rate: f32,
}

impl ErrorReportingSettings {
    fn from_env(env: &Env) -> Result<Self, ConfigError> {
        let traces_sample_rate = env.parse_or::<f32>("SENTRY_TRACES_SAMPLE_RATE", 0.0)?;
        if !(0.0..=1.0).contains(&traces_sample_rate) {
            return Err(ConfigError::InvalidValue {
                key: "SENTRY_TRACES_SAMPLE_RATE",
                value: traces_sample_rate.to_string(),
                reason: "must be between 0.0 and 1.0".to_string(),
            });
        }

        Ok(Self {
            dsn: env.non_empty("SENTRY_DSN").map(|d| d.trim().to_string()),
            environment: env
                .non_empty("SENTRY_ENVIRONMENT")
                .unwrap_or("production")
                .to_string(),
            traces_sample_rate,
        })
    }
}

/// Fully resolved settings for one deployment profile.
#[derive(Clone, PartialEq)]
pub struct ConfigProfile {
    pub profile: Profile,
    /// Application secret; may be empty in production until the gate rejects it.
    pub secret_key: String,
    /// Token signing secret.
    pub jwt_secret_key: String,
    pub debug: bool,
    pub testing: bool,
    pub database: DatabaseSettings,
    pub frontend_origin: FrontendOrigin,
    pub rate_limit: RateLimitSettings,
    pub password_hash_cost: u32,
    pub token_expiry: Duration,
    pub cookie_policy: Option<CookiePolicy>,
    pub log: LogSettings,
    pub error_reporting: ErrorReportingSettings,
    pub host: String,
    pub port: u16,
}

impl ConfigProfile {
    /// Resolves the settings of `profile` from an environment snapshot.
    ///
    /// # Arguments
    /// - `profile` - Deployment profile to build
    /// - `env` - Captured environment variables
    ///
    /// # Returns
    /// - `Ok(ConfigProfile)` - Fully populated settings
    /// - `Err(ConfigError)` - A variable holds an unusable value
    pub fn resolve(profile: Profile, env: &Env) -> Result<Self, ConfigError> {
        match profile {
            Profile::Development => Self::development(env),
            Profile::Production => Self::production(env),
            Profile::Testing => Self::testing(env),
        }
    }

    fn development(env: &Env) -> Result<Self, ConfigError> {
        let url = match env
            .non_empty("SQLALCHEMY_DATABASE_URI")
            .or_else(|| env.non_empty("DATABASE_URL"))
        {
            Some(url) => url.trim().to_string(),
            None if env.any_set(&["DB_USER", "DB_PASSWORD", "DB_HOST", "DB_NAME"]) => {
                compose_from_parts(env)?
            }
            None => DEFAULT_DEV_DATABASE_URL.to_string(),
        };

        let database = DatabaseSettings {
            url,
            ssl: SslPolicy::Disabled,
            pool: PoolSettings::from_env(env)?,
            auto_migrate: true,
        };

        Ok(Self {
            debug: true,
            ..Self::base(Profile::Development, env, database, default_storage(env))?
        })
    }

    fn production(env: &Env) -> Result<Self, ConfigError> {
        let url = match env
            .non_empty("DATABASE_URL")
            .or_else(|| env.non_empty("SQLALCHEMY_DATABASE_URI"))
        {
            Some(raw) => normalize_production_url(raw)?,
            None => String::new(),
        };

        let database = DatabaseSettings {
            url,
            ssl: SslPolicy::Required,
            pool: PoolSettings::from_env(env)?,
            auto_migrate: env.flag_or("AUTO_MIGRATE", false)?,
        };

        let storage_uri = env
            .non_empty("RATELIMIT_STORAGE_URI")
            .or_else(|| env.non_empty("REDIS_URL"))
            .unwrap_or(DEFAULT_STORAGE_URI)
            .to_string();

        let base = Self::base(Profile::Production, env, database, storage_uri)?;
        let secret_key = env.get_or("SECRET_KEY", "");

        Ok(Self {
            jwt_secret_key: jwt_secret(env, &secret_key),
            secret_key,
            token_expiry: PRODUCTION_TOKEN_EXPIRY,
            cookie_policy: Some(CookiePolicy {
                secure: true,
                http_only: true,
                same_site: "Lax",
            }),
            ..base
        })
    }

    fn testing(env: &Env) -> Result<Self, ConfigError> {
        let database = DatabaseSettings {
            url: TEST_DATABASE_URL.to_string(),
            ssl: SslPolicy::Disabled,
            pool: PoolSettings::single(),
            auto_migrate: true,
        };

        Ok(Self {
            debug: true,
            testing: true,
            jwt_secret_key: TEST_JWT_SECRET_KEY.to_string(),
            password_hash_cost: TEST_HASH_COST,
            ..Self::base(Profile::Testing, env, database, default_storage(env))?
        })
    }

    /// Defaults shared by every profile; each builder overrides what differs.
    fn base(
        profile: Profile,
        env: &Env,
        database: DatabaseSettings,
        storage_uri: String,
    ) -> Result<Self, ConfigError> {
        let secret_key = env
            .non_empty("SECRET_KEY")
            .unwrap_or(DEV_SECRET_KEY)
            .to_string();

        Ok(Self {
            profile,
            jwt_secret_key: jwt_secret(env, &secret_key),
            secret_key,
            debug: false,
            testing: false,
            database,
            frontend_origin: frontend_origin(profile, env)?,
            rate_limit: RateLimitSettings::from_env(env, storage_uri)?,
            password_hash_cost: DEFAULT_HASH_COST,
            token_expiry: DEFAULT_TOKEN_EXPIRY,
            cookie_policy: None,
            log: LogSettings::default(),
            error_reporting: ErrorReportingSettings::from_env(env)?,
            host: env
                .non_empty("HOST")
                .unwrap_or(DEFAULT_HOST)
                .trim()
                .to_string(),
            port: env.parse_or("PORT", DEFAULT_PORT)?,
        })
    }
}

/// Secrets are never printed.
impl fmt::Debug for ConfigProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigProfile")
            .field("profile", &self.profile)
            .field("secret_key", &redacted(&self.secret_key))
            .field("jwt_secret_key", &redacted(&self.jwt_secret_key))
            .field("debug", &self.debug)
            .field("testing", &self.testing)
            .field("database_url", &database::redact(&self.database.url))
            .field("ssl", &self.database.ssl)
            .field("pool", &self.database.pool)
            .field("auto_migrate", &self.database.auto_migrate)
            .field("frontend_origin", &self.frontend_origin)
            .field("rate_limit", &self.rate_limit)
            .field("password_hash_cost", &self.password_hash_cost)
            .field("token_expiry", &self.token_expiry)
            .field("cookie_policy", &self.cookie_policy)
            .field("log", &self.log)
            .field("error_reporting", &self.error_reporting.environment)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

/// `JWT_SECRET_KEY` when non-empty, otherwise the application secret.
fn jwt_secret(env: &Env, secret_key: &str) -> String {
    env.non_empty("JWT_SECRET_KEY")
        .unwrap_or(secret_key)
        .to_string()
}

fn default_storage(env: &Env) -> String {
    env.non_empty("RATELIMIT_STORAGE_URI")
        .unwrap_or(DEFAULT_STORAGE_URI)
        .to_string()
}

/// Parses `FRONTEND_URL` into a CORS origin.
///
/// A trailing `/` is dropped because browsers never send one in `Origin`.
fn frontend_origin(profile: Profile, env: &Env) -> Result<FrontendOrigin, ConfigError> {
    let raw = env
        .non_empty("FRONTEND_URL")
        .unwrap_or(DEFAULT_FRONTEND_URL)
        .trim();

    let origin = raw.trim_end_matches('/');
    if origin == "*" {
        return match profile {
            Profile::Production => Err(ConfigError::WildcardOriginInProduction),
            Profile::Development | Profile::Testing => Ok(FrontendOrigin::Any),
        };
    }

    HeaderValue::from_str(origin)
        .map(FrontendOrigin::Exact)
        .map_err(|e| ConfigError::InvalidValue {
            key: "FRONTEND_URL",
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod test;
