//! Startup configuration. The four connection settings are read once from
//! `DB_*` environment variables; a missing value fails here with the variable
//! name in the message instead of surfacing later as an opaque query error.

use anyhow::{Context, Result};
use figment::providers::Env;
use figment::Figment;
use serde::Deserialize;

/// Default PostgreSQL port, used when `DB_PORT` is absent.
fn default_port() -> u16 {
    5432
}

/// Connection settings for the employee database.
#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub name: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Read the configuration from the process environment.
pub fn load() -> Result<DbConfig> {
    extract(Figment::from(Env::prefixed("DB_")))
}

fn extract(figment: Figment) -> Result<DbConfig> {
    figment
        .extract()
        .context("missing or invalid database settings; DB_USER, DB_PASSWORD, DB_HOST and DB_NAME must be set")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Figment {
        Figment::new()
            .merge(("user", "tracker"))
            .merge(("password", "secret"))
            .merge(("host", "localhost"))
            .merge(("name", "employees"))
    }

    #[test]
    fn all_settings_present_extracts() {
        let config = extract(populated()).unwrap();
        assert_eq!(config.user, "tracker");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.name, "employees");
    }

    #[test]
    fn port_defaults_when_absent() {
        let config = extract(populated()).unwrap();
        assert_eq!(config.port, 5432);
    }

    #[test]
    fn explicit_port_wins() {
        let config = extract(populated().merge(("port", 6543))).unwrap();
        assert_eq!(config.port, 6543);
    }

    #[test]
    fn missing_setting_is_a_clear_failure() {
        let figment = Figment::new()
            .merge(("user", "tracker"))
            .merge(("host", "localhost"))
            .merge(("name", "employees"));
        let err = extract(figment).unwrap_err();
        assert!(err.to_string().contains("DB_PASSWORD"));
    }
}
