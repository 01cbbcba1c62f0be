use tracing_subscriber::reload;

use crate::server::{
    error::startup::BootstrapError,
    observability::logging::{FileLayerSlot, FileLogging, LogInstaller},
    startup::bootstrap,
};

use super::*;

/// Installer whose subscriber is gone; only usable for profiles that skip file logs.
fn detached_logs() -> LogInstaller {
    let (_layer, handle) = reload::Layer::new(FileLayerSlot::None);
    LogInstaller::new(handle)
}

/// Tests that production refuses to start without mandatory settings.
///
/// Expected: ProductionValidation error naming all three keys, and no extension
/// initialized
#[tokio::test]
async fn production_gate_stops_before_extensions() {
    let registry = ExtensionRegistry::new();

    let result = bootstrap(Profile::Production, &Env::default(), &registry, &detached_logs()).await;

    match result {
        Err(BootstrapError::ProductionValidation(err)) => {
            assert_eq!(
                err.to_string(),
                "Missing required production settings: SECRET_KEY, JWT_SECRET_KEY, SQLALCHEMY_DATABASE_URI"
            );
        }
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("production started without settings"),
    }
    assert!(registry.initialized().is_empty());
}

/// Tests that a wildcard frontend origin is rejected in production.
///
/// Expected: Config error before the gate runs
#[tokio::test]
async fn rejects_wildcard_origin_in_production() {
    let env = Env::from_pairs([
        ("SECRET_KEY", "s"),
        ("JWT_SECRET_KEY", "j"),
        ("SQLALCHEMY_DATABASE_URI", "mysql://u:p@db/hbnb"),
        ("FRONTEND_URL", "*"),
    ]);

    let result = bootstrap(Profile::Production, &env, &ExtensionRegistry::new(), &detached_logs()).await;

    assert!(matches!(result, Err(BootstrapError::Config(_))));
}

/// Tests a complete bootstrap of the testing profile.
///
/// Expected: every extension initialized, schema migrated, file logging skipped and a
/// working service
#[tokio::test]
async fn bootstraps_testing_profile() {
    let registry = ExtensionRegistry::new();

    let app = bootstrap(Profile::Testing, &Env::default(), &registry, &detached_logs())
        .await
        .unwrap();

    assert_eq!(
        registry.initialized(),
        ["persistence", "token", "password_hashing", "rate_limiter", "migration"]
    );
    assert_eq!(app.migrations.pending, 0);
    assert!(app.migrations.applied > 0);
    assert_eq!(app.observability.file_logging, FileLogging::Skipped);
    assert!(app.observability.error_reporting.is_none());
    assert_eq!(app.config.profile, Profile::Testing);

    let response = send(&app.service(), get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests that an unusable rate limit store aborts startup.
///
/// Expected: Extension error and no rate limiter or migration binding
#[tokio::test]
async fn aborts_on_unsupported_rate_limit_storage() {
    let registry = ExtensionRegistry::new();
    let env = Env::from_pairs([("RATELIMIT_STORAGE_URI", "memcached://localhost:11211")]);

    let result = bootstrap(Profile::Testing, &env, &registry, &detached_logs()).await;

    assert!(matches!(result, Err(BootstrapError::Extension(_))));
    assert_eq!(
        registry.initialized(),
        ["persistence", "token", "password_hashing"]
    );
}

/// Tests that development starts with blank secrets instead of running the
/// production check or failing token setup.
///
/// Expected: every extension initialized with the local development secret
#[tokio::test]
async fn development_starts_with_blank_secrets() {
    let dir = tempfile::tempdir().unwrap();
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("dev.db").display());
    let env = Env::from_pairs([
        ("SECRET_KEY", ""),
        ("JWT_SECRET_KEY", ""),
        ("DATABASE_URL", database_url.as_str()),
    ]);
    let registry = ExtensionRegistry::new();

    let app = bootstrap(Profile::Development, &env, &registry, &detached_logs())
        .await
        .unwrap();

    assert_eq!(registry.initialized().len(), 5);
    assert_eq!(app.config.secret_key, "dev-secret-key");
    assert_eq!(app.config.jwt_secret_key, "dev-secret-key");
    assert_eq!(app.observability.file_logging, FileLogging::Skipped);

    let response = send(&app.service(), get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
