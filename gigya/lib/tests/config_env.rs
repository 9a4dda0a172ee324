//! Tests that read configuration from the process environment.
//!
//! Environment variables are process-global, so every test here runs serially.

use std::env;

use gigya::config::{API_KEY_ENV, API_SECRET_ENV, DOMAIN_ENV, TIMEOUT_ENV};
use gigya::{ConfigError, GigyaClient, GigyaConfig};
use serial_test::serial;

fn clear() {
    for var in [API_KEY_ENV, API_SECRET_ENV, DOMAIN_ENV, TIMEOUT_ENV] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn from_env_reads_credentials() {
    clear();
    env::set_var(API_KEY_ENV, "3_env-key");
    env::set_var(API_SECRET_ENV, "env-secret");
    env::set_var(DOMAIN_ENV, "eu1.gigya.com");

    let config = GigyaConfig::from_env().unwrap();
    assert_eq!(config.api_key(), "3_env-key");
    assert_eq!(config.secret(), "env-secret");
    assert_eq!(config.domain(), "eu1.gigya.com");

    clear();
}

#[test]
#[serial]
fn from_env_requires_api_key() {
    clear();
    env::set_var(API_SECRET_ENV, "env-secret");

    let err = GigyaConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnv { var } if var == API_KEY_ENV));

    clear();
}

#[test]
#[serial]
fn global_is_read_once() {
    clear();
    env::set_var(API_KEY_ENV, "3_first");
    env::set_var(API_SECRET_ENV, "first-secret");

    let first = GigyaConfig::global().unwrap();

    env::set_var(API_KEY_ENV, "3_second");
    let second = GigyaConfig::global().unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(second.api_key(), "3_first");

    let client = GigyaClient::from_env().unwrap();
    assert_eq!(client.config().api_key(), "3_first");
    assert!(client.required_parameters().starts_with("apiKey=3_first&"));

    clear();
}
