// SPDX-License-Identifier: MIT

use super::*;
use std::collections::HashMap;

fn lookup<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
    |key| vars.get(key).map(|v| v.to_string())
}

#[test]
fn provided_database_and_secret_are_honored_while_the_rest_default() {
    let vars = HashMap::from([("DATABASE_URL", "mysql://u:p@localhost/fleet"), ("API_SECRET", "s3cret")]);
    let config = Config::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.database_url, "mysql://u:p@localhost/fleet");
    assert_eq!(config.api_secret, "s3cret");
    assert_eq!(config.http_bind_addr, DEFAULT_HTTP_BIND_ADDR);
    assert_eq!(config.webhook_url, None);
    assert_eq!(config.refresh_interval, Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS));
}

#[test]
fn overrides_are_honored() {
    let vars = HashMap::from([
        ("DATABASE_URL", "mysql://u:p@localhost/fleet"),
        ("API_SECRET", "s3cret"),
        ("HTTP_BIND_ADDR", "127.0.0.1:9000"),
        ("WEBHOOK_URL", "https://hooks.example/fleet"),
        ("REFRESH_INTERVAL_SECS", "30"),
    ]);
    let config = Config::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.http_bind_addr, "127.0.0.1:9000");
    assert_eq!(config.webhook_url.as_deref(), Some("https://hooks.example/fleet"));
    assert_eq!(config.refresh_interval, Duration::from_secs(30));
}

#[test]
fn a_non_numeric_refresh_interval_is_rejected() {
    let vars = HashMap::from([
        ("DATABASE_URL", "mysql://u:p@localhost/fleet"),
        ("API_SECRET", "s3cret"),
        ("REFRESH_INTERVAL_SECS", "soon"),
    ]);
    let err = Config::from_lookup(lookup(&vars)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidInt("REFRESH_INTERVAL_SECS", _)));
}

#[test]
fn database_url_and_api_secret_default_when_unset() {
    let vars = HashMap::new();
    let config = Config::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.api_secret, DEFAULT_API_SECRET);
}

#[test]
fn an_empty_webhook_url_is_treated_as_unset() {
    let vars = HashMap::from([("DATABASE_URL", "mysql://u:p@localhost/fleet"), ("API_SECRET", "s3cret"), ("WEBHOOK_URL", "")]);
    let config = Config::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(config.webhook_url, None);
}
