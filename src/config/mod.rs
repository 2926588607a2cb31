use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::postcodes::DEFAULT_BASE_URL;

const CONFIG_NAME: &str = "nearby-providers";

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    80
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where and how patiently to call the geocoding service.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeocoderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FileConfig {
    /// Load the first parsable config file from the search path.
    pub fn load() -> Option<Self> {
        Self::load_first(&get_config_paths())
    }

    fn load_first(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file. Unlike [`FileConfig::load`],
    /// a missing or malformed file is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("{CONFIG_NAME}.toml")));
    paths.push(PathBuf::from(format!(".{CONFIG_NAME}.toml")));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_NAME).join("config.toml"));
        paths.push(config_dir.join(format!("{CONFIG_NAME}.toml")));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{CONFIG_NAME}.toml")));
        paths.push(home.join(".config").join(CONFIG_NAME).join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 80);
        assert_eq!(config.geocoder.base_url, "https://api.postcodes.io/postcodes/");
        assert_eq!(config.geocoder.timeout_secs, 5);
    }

    #[test]
    fn test_partial_sections() {
        let config: FileConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [geocoder]
            timeout_secs = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.geocoder.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.geocoder.timeout_secs, 2);
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nearby-providers.toml");
        std::fs::write(&path, "[geocoder]\nbase_url = \"http://127.0.0.1:9000/pc/\"\n").unwrap();

        let config = FileConfig::from_path(&path).unwrap();
        assert_eq!(config.geocoder.base_url, "http://127.0.0.1:9000/pc/");
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempdir().unwrap();
        assert!(FileConfig::from_path(&dir.path().join("missing.toml")).is_err());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server\nport = ").unwrap();
        assert!(FileConfig::from_path(&bad).is_err());
    }

    #[test]
    fn test_load_first_skips_unparsable() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&bad, "port = \"eighty\"\n[server").unwrap();
        std::fs::write(&good, "[server]\nport = 3000\n").unwrap();

        let paths = vec![dir.path().join("absent.toml"), bad, good];
        let config = FileConfig::load_first(&paths).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_first_none() {
        let dir = tempdir().unwrap();
        assert!(FileConfig::load_first(&[dir.path().join("absent.toml")]).is_none());
    }
}
