use std::env;
use anyhow::{bail, Context, Result};

use crate::routes;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub todos_base_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any variable source; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let todos_base_path = normalize_base_path(
            &lookup("TODOS_BASE_PATH").unwrap_or_else(|| routes::TODOS_BASE.to_string()),
        )?;

        Ok(Config {
            service_port,
            service_host,
            todos_base_path,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Todos mounted at: {}", self.todos_base_path);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

// Mount points must be absolute; a trailing slash is dropped so nesting sees "/todos"
fn normalize_base_path(raw: &str) -> Result<String> {
    if !raw.starts_with('/') {
        bail!("TODOS_BASE_PATH must start with '/', got '{}'", raw);
    }
    if raw.contains(['{', '}', '*']) {
        bail!("TODOS_BASE_PATH must not contain path parameters, got '{}'", raw);
    }

    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok("/".to_string());
    }

    // Nesting onto a route the app already serves panics inside axum
    for reserved in [routes::HEALTH, routes::OPENAPI_JSON] {
        if trimmed == reserved {
            bail!("TODOS_BASE_PATH must not shadow {}", reserved);
        }
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_with(&[
            ("SERVICE_PORT", "8080"),
            ("SERVICE_HOST", "127.0.0.1"),
            ("TODOS_BASE_PATH", "/api/todos"),
        ])
        .unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.todos_base_path, "/api/todos");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_with(&[]).unwrap();

        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.todos_base_path, "/todos");
    }

    #[test]
    fn test_invalid_port() {
        let result = config_with(&[("SERVICE_PORT", "not-a-number")]);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = config_with(&[("SERVICE_PORT", "99999")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_path_trailing_slash_trimmed() {
        let config = config_with(&[("TODOS_BASE_PATH", "/todos/")]).unwrap();
        assert_eq!(config.todos_base_path, "/todos");

        let config = config_with(&[("TODOS_BASE_PATH", "/")]).unwrap();
        assert_eq!(config.todos_base_path, "/");
    }

    #[test]
    fn test_base_path_must_be_absolute() {
        let result = config_with(&[("TODOS_BASE_PATH", "todos")]);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("TODOS_BASE_PATH"));
    }

    #[test]
    fn test_base_path_rejects_parameters() {
        let result = config_with(&[("TODOS_BASE_PATH", "/users/{user}/todos")]);
        assert!(result.is_err());

        let result = config_with(&[("TODOS_BASE_PATH", "/todos/*rest")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_path_rejects_reserved() {
        for raw in ["/health", "/health/", "/api-docs/openapi.json"] {
            let result = config_with(&[("TODOS_BASE_PATH", raw)]);

            assert!(result.is_err(), "{} accepted", raw);
            let error = result.unwrap_err();
            assert!(error.to_string().contains("must not shadow"), "{}", error);
        }

        // Only an exact match collides
        let config = config_with(&[("TODOS_BASE_PATH", "/health/todos")]).unwrap();
        assert_eq!(config.todos_base_path, "/health/todos");
    }
}
