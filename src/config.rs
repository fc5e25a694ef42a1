//! # Process Configuration
//!
//! Settings are read from the process environment (after `.env` has been
//! loaded by `dotenvy` in `main`).
//!
//! ## Environment Variables
//!
//! - `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` - Required store coordinates
//! - `DB_PORT` - Store port (default `5432`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default `5`)
//! - `PORT` - HTTP listening port (default `3000`)

use std::env;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

use crate::utils::constant::{DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_PORT, DEFAULT_HTTP_PORT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("env variable `{0}` should be set")]
    Missing(&'static str),

    #[error("env variable `{name}` has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Coordinates of the store holding the `match` table.
#[derive(Debug)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub database_name: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(self.password.expose_secret())
            .database(&self.database_name)
    }
}

#[derive(Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub http_port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let database = DatabaseSettings {
            host: required("DB_HOST")?,
            port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            username: required("DB_USER")?,
            password: SecretString::from(required("DB_PASSWORD")?),
            database_name: required("DB_NAME")?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
        };

        Ok(Self {
            database,
            http_port: parse_or(&lookup, "PORT", DEFAULT_HTTP_PORT)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { name, value }),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("DB_HOST", "db.internal"),
        ("DB_USER", "matchday"),
        ("DB_PASSWORD", "hunter2"),
        ("DB_NAME", "league"),
    ];

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let settings = Settings::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(settings.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(settings.database.port, DEFAULT_DB_PORT);
        assert_eq!(settings.database.max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(settings.database.host, "db.internal");
        assert_eq!(settings.database.database_name, "league");
        assert_eq!(settings.database.password.expose_secret(), "hunter2");
    }

    #[test]
    fn explicit_ports_override_defaults() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("PORT", "8080"),
            ("DB_PORT", " 15432 "),
            ("DB_MAX_CONNECTIONS", "12"),
        ]);

        let settings = Settings::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(settings.http_port, 8080);
        assert_eq!(settings.database.port, 15432);
        assert_eq!(settings.database.max_connections, 12);
    }

    #[test]
    fn missing_required_var_is_reported_by_name() {
        let vars: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "DB_PASSWORD")
            .collect();

        let err = Settings::from_lookup(lookup_from(&vars)).unwrap_err();

        assert_eq!(err, ConfigError::Missing("DB_PASSWORD"));
    }

    #[test]
    fn unparsable_port_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "eighty"));

        let err = Settings::from_lookup(lookup_from(&vars)).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn password_is_redacted_in_debug_output() {
        let settings = Settings::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert!(!format!("{settings:?}").contains("hunter2"));
    }
}
