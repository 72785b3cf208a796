use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PORT_ENV: &str = "PATHFORGE_PORT";
pub const SEED_ENV: &str = "PATHFORGE_SEED";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StaticFilesConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MockConfig {
    /// Fixed seed for every render; entropy when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{name} must be {expected}, got {value:?}")]
    Env {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("invalid server address {0}")]
    Address(String),
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dir = "dist"

[mock]
"#;

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse().map_err(|_| ConfigError::Address(raw))
    }

    /// Static directory, resolved against the executable directory when relative.
    pub fn static_dir(&self) -> PathBuf {
        let dir = Path::new(&self.static_files.dir);
        if dir.is_absolute() {
            return dir.to_path_buf();
        }
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let candidate = exe_dir.join(dir);
                if candidate.exists() {
                    return candidate;
                }
            }
        }
        dir.to_path_buf()
    }

    /// Apply `PATHFORGE_PORT` / `PATHFORGE_SEED` on top of the file values.
    fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup(PORT_ENV) {
            self.server.port = value.trim().parse().map_err(|_| ConfigError::Env {
                name: PORT_ENV,
                expected: "a port number",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(SEED_ENV) {
            let seed = value.trim().parse().map_err(|_| ConfigError::Env {
                name: SEED_ENV,
                expected: "an unsigned integer",
                value: value.clone(),
            })?;
            self.mock.seed = Some(seed);
        }
        Ok(self)
    }
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// Environment overrides are applied in both cases.
pub fn load_config() -> Result<Config, ConfigError> {
    let config = match find_config_file() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            parse_config(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };

    config.apply_overrides(|name| std::env::var(name).ok())
}

fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dir, "dist");
        assert_eq!(config.mock.seed, None);
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_mock_section_is_optional() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            [static_files]
            dir = "/srv/dist"
            "#,
        )
        .unwrap();
        assert_eq!(config.mock, MockConfig::default());
        assert_eq!(config.static_dir(), PathBuf::from("/srv/dist"));
    }

    #[test]
    fn test_env_overrides() {
        let config = parse_config(DEFAULT_CONFIG)
            .unwrap()
            .apply_overrides(|name| match name {
                PORT_ENV => Some("4100".to_string()),
                SEED_ENV => Some("7".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.mock.seed, Some(7));
    }

    #[test]
    fn test_bad_env_value_is_an_error() {
        let result = parse_config(DEFAULT_CONFIG)
            .unwrap()
            .apply_overrides(|name| (name == PORT_ENV).then(|| "http".to_string()));
        assert!(matches!(result, Err(ConfigError::Env { name: PORT_ENV, .. })));
    }

    #[test]
    fn test_bad_host_is_reported() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".to_string();
        assert!(matches!(config.socket_addr(), Err(ConfigError::Address(_))));
    }
}
