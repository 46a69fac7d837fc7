//! Process settings read from the environment.

use std::env;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Address the server binds when `HOST_ADDRESS` is unset.
pub const DEFAULT_HOST_ADDRESS: &str = "127.0.0.1:3000";

/// Directory holding `payroll.yaml` when `PAYROLL_CONFIG_DIR` is unset.
pub const DEFAULT_CONFIG_DIR: &str = "./config";

/// Settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Socket address to bind.
    pub host_address: SocketAddr,
    /// Directory the payroll configuration is loaded from.
    pub config_dir: PathBuf,
}

impl ServerSettings {
    /// Reads `HOST_ADDRESS` and `PAYROLL_CONFIG_DIR`.
    pub fn from_env() -> EngineResult<Self> {
        info!("Loading environment `HOST_ADDRESS` and `PAYROLL_CONFIG_DIR`");
        Self::from_values(
            env::var("HOST_ADDRESS").ok(),
            env::var("PAYROLL_CONFIG_DIR").ok(),
        )
    }

    /// Builds settings from raw values, applying defaults for `None`.
    pub fn from_values(host_address: Option<String>, config_dir: Option<String>) -> EngineResult<Self> {
        let host = host_address.unwrap_or_else(|| DEFAULT_HOST_ADDRESS.to_string());
        let invalid_host = |message: String| EngineError::InvalidSetting {
            name: "HOST_ADDRESS".to_string(),
            message,
        };

        let host_address = host
            .to_socket_addrs()
            .map_err(|e| invalid_host(format!("'{}' is not a valid address: {}", host, e)))?
            .next()
            .ok_or_else(|| invalid_host(format!("'{}' did not resolve", host)))?;

        Ok(Self {
            host_address,
            config_dir: PathBuf::from(config_dir.unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string())),
        })
    }
}
