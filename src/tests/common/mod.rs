// tests/common/mod.rs
use std::time::Duration;

use crate::client::sirene::SireneClient;
use crate::config::settings::{Environment, Settings};
use crate::resilience::retry::RetryPolicy;

pub fn test_settings(base_url: &str) -> Settings {
    Settings {
        environment: Environment::Development,
        log_level: "debug".to_owned(),
        api_url: base_url.trim_end_matches('/').to_owned(),
        client_id: "test-client".to_owned(),
        client_secret: "test-secret".to_owned(),
        siren: "123456789".to_owned(),
    }
}

/// Production backoff starts at 4 seconds; tests use millisecond delays.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        attempts: 3,
        base_delay: Duration::from_millis(10),
        max_delay: Duration::from_millis(40),
    }
}

pub fn test_client(base_url: &str) -> SireneClient {
    SireneClient::with_retry_policy(test_settings(base_url), fast_retry())
}
