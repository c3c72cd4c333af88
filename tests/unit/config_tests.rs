use std::collections::HashMap;

use vitals::config::{Config, UNKNOWN_VERSION};

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_when_unset() {
    let config = Config::default();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.environment, None);
    assert_eq!(config.version, UNKNOWN_VERSION);
}

#[test]
fn test_reads_all_variables() {
    let config = config_from(&[
        ("VITALS_HOST", "127.0.0.1"),
        ("VITALS_PORT", "9090"),
        ("VITALS_ENV", "production"),
        ("VITALS_APP_VERSION", "2.0.1"),
    ]);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9090);
    assert_eq!(config.environment.as_deref(), Some("production"));
    assert_eq!(config.version, "2.0.1");
}

#[test]
fn test_empty_version_falls_back_to_unknown() {
    let config = config_from(&[("VITALS_APP_VERSION", "")]);
    assert_eq!(config.version, UNKNOWN_VERSION);
}

#[test]
fn test_bad_port_uses_default() {
    let config = config_from(&[("VITALS_PORT", "not-a-port")]);
    assert_eq!(config.port, 8080);

    let config = config_from(&[("VITALS_PORT", "70000")]);
    assert_eq!(config.port, 8080);
}
