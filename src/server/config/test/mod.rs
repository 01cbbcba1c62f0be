use crate::server::{
    config::{
        database::{SslPolicy, DEFAULT_DEV_DATABASE_URL, TEST_DATABASE_URL},
        env::Env,
        ConfigProfile, FrontendOrigin, Profile,
    },
    error::config::ConfigError,
};
use std::time::Duration;
