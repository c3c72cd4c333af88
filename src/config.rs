use std::env;

/// Version label reported when `VITALS_APP_VERSION` is unset or empty.
pub const UNKNOWN_VERSION: &str = "unknown";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Runtime mode label such as "development" or "production".
    pub environment: Option<String>,
    pub version: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("VITALS_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("VITALS_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(8080),
            environment: lookup("VITALS_ENV").filter(|e| !e.is_empty()),
            version: lookup("VITALS_APP_VERSION")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
