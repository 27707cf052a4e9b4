use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "postboard.toml",
    "config/postboard.toml",
    "crates/config/postboard.toml",
    "../postboard.toml",
    "../config/postboard.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://postboard.db".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "AuthConfig::default_secret")]
    pub jwt_secret: String,
    #[serde(default = "AuthConfig::default_token_ttl")]
    pub token_ttl_seconds: u64,
    #[serde(default = "AuthConfig::default_issuer")]
    pub issuer: String,
    #[serde(default = "AuthConfig::default_audience")]
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Self::default_secret(),
            token_ttl_seconds: Self::default_token_ttl(),
            issuer: Self::default_issuer(),
            audience: Self::default_audience(),
        }
    }
}

impl AuthConfig {
    fn default_secret() -> String {
        "default_secret_change_in_production".to_string()
    }

    // 3 hours
    const fn default_token_ttl() -> u64 {
        10_800
    }

    fn default_issuer() -> String {
        "postboard".to_string()
    }

    fn default_audience() -> String {
        "postboard-clients".to_string()
    }
}

/// Load the application configuration by combining defaults, an optional
/// `postboard.toml`, and `POSTBOARD`-prefixed environment overrides.
///
/// ```
/// use postboard_config::load;
///
/// std::env::remove_var("POSTBOARD_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.http.address.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("http.address", defaults.http.address.clone())
        .unwrap()
        .set_default("http.port", i64::from(defaults.http.port))
        .unwrap()
        .set_default("database.url", defaults.database.url.clone())
        .unwrap()
        .set_default(
            "database.max_connections",
            i64::from(defaults.database.max_connections),
        )
        .unwrap()
        .set_default("auth.jwt_secret", defaults.auth.jwt_secret.clone())
        .unwrap()
        .set_default(
            "auth.token_ttl_seconds",
            i64::try_from(defaults.auth.token_ttl_seconds).unwrap_or(i64::MAX),
        )
        .unwrap()
        .set_default("auth.issuer", defaults.auth.issuer.clone())
        .unwrap()
        .set_default("auth.audience", defaults.auth.audience.clone())
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("POSTBOARD").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("POSTBOARD_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via POSTBOARD_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded backend configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.http.port, 8080);
        assert!(config.database.url.starts_with("sqlite://"));
        assert_eq!(config.auth.token_ttl_seconds, 10_800);
    }

    #[test]
    fn load_without_file_uses_defaults() {
        std::env::remove_var("POSTBOARD_CONFIG");
        let config = load().expect("load with defaults");
        assert_eq!(config.http.address, "127.0.0.1");
        assert_eq!(config.database.max_connections, 10);
    }
}
