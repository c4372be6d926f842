//! Server configuration
//!
//! Layered as defaults < JSON config file < environment variables.
//!
//! Config file lookup:
//! - `PORTRAIT_CONFIG`, if set (must exist)
//! - otherwise `<config dir>/portrait/portraitd.json`, if present
//!   - Linux: ~/.config/portrait/
//!   - Windows: %APPDATA%\portrait\
//!   - MacOS: ~/Library/Application Support/portrait/

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use portrait::config::StageConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 5000;

const ENV_PORT: &str = "PORT";
const ENV_HOST: &str = "PORTRAIT_HOST";
const ENV_PUBLIC_DIR: &str = "PORTRAIT_PUBLIC_DIR";
const ENV_VIEWS_DIR: &str = "PORTRAIT_VIEWS_DIR";
const ENV_CONFIG: &str = "PORTRAIT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Served as static assets for every path without a route.
    pub public_dir: PathBuf,
    /// Holds `portrait.html`.
    pub views_dir: PathBuf,
    /// Page title of the portrait view.
    pub title: String,
    /// ES module that boots the WASM client, relative to the public root.
    pub client_js: String,
    pub stage: StageConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from("public"),
            views_dir: PathBuf::from("views"),
            title: "portrait".to_string(),
            client_js: "pkg/portrait_web.js".to_string(),
            stage: StageConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Resolve the full configuration from the process environment.
    pub fn load() -> Result<Self, ServerError> {
        let env = |key: &str| std::env::var(key).ok();
        let default_file = dirs::config_dir().map(|d| d.join("portrait").join("portraitd.json"));
        Self::resolve(env, default_file)
    }

    /// Same as [`ServerConfig::load`], with the environment and the default
    /// file location supplied by the caller.
    pub fn resolve<F>(env: F, default_file: Option<PathBuf>) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match env(ENV_CONFIG) {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ServerError::MissingConfig { path });
                }
                Self::from_file(&path)?
            }
            None => match default_file.filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    info!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(env)?;
        config.stage.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ServerError> {
        info!("Loading config from {:?}", path);
        let text = std::fs::read_to_string(path).map_err(|source| ServerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ServerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Environment overrides. Empty values are ignored.
    pub fn apply_env<F>(&mut self, env: F) -> Result<(), ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_PORT) {
            self.port = parse_env(ENV_PORT, value)?;
        }
        if let Some(value) = get(ENV_HOST) {
            self.host = parse_env(ENV_HOST, value)?;
        }
        if let Some(value) = get(ENV_PUBLIC_DIR) {
            self.public_dir = PathBuf::from(value);
        }
        if let Some(value) = get(ENV_VIEWS_DIR) {
            self.views_dir = PathBuf::from(value);
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_env<T: FromStr>(var: &'static str, value: String) -> Result<T, ServerError> {
    let parsed = value.trim().parse();
    parsed.map_err(|_| ServerError::Env { var, value })
}
