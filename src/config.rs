use std::fmt::Display;
use std::str::FromStr;

/// Runtime settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// PostgreSQL URL. Without one the app runs on the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Cookie signing key; must be at least 64 bytes to be used.
    pub session_key: Option<String>,
    pub app_name: String,
    /// Load sample toner requests into an empty store on startup.
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            database_url: get("DATABASE_URL"),
            db_max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 8),
            session_key: get("SESSION_KEY"),
            app_name: get("APP_NAME").unwrap_or_else(|| "Ministry of Agriculture".to_string()),
            seed_demo: get("SEED_DEMO")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::warn!("Invalid {key} value '{raw}': {e}, using default {default}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = config(&[]);
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
        assert!(cfg.database_url.is_none());
        assert_eq!(cfg.db_max_connections, 8);
        assert_eq!(cfg.app_name, "Ministry of Agriculture");
        assert!(!cfg.seed_demo);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("DATABASE_URL", "postgres://localhost/portal"),
            ("DB_MAX_CONNECTIONS", "16"),
            ("SEED_DEMO", "true"),
        ]);
        assert_eq!(cfg.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/portal"));
        assert_eq!(cfg.db_max_connections, 16);
        assert!(cfg.seed_demo);
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let cfg = config(&[("DATABASE_URL", "  "), ("DB_MAX_CONNECTIONS", "lots")]);
        assert!(cfg.database_url.is_none());
        assert_eq!(cfg.db_max_connections, 8);
    }
}
