//! Configuration handling for the netaddr tool.
//!
//! Settings come from the shared YAML config file, then environment
//! variables, then command-line flags (applied by the caller). The log level
//! is not part of it: logging is set up before the file is read.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One canonical literal per line
    Text,
    /// JSON documents
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Invalid output format: {}. Use 'text' or 'json'", other),
        }
    }
}

/// netaddr tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetaddrConfig {
    /// Result format
    pub output: OutputFormat,
    /// Upper bound on addresses printed by `hosts`
    pub max_hosts: usize,
}

impl Default for NetaddrConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            max_hosts: 1024,
        }
    }
}

/// Root configuration structure (matches the YAML structure)
#[derive(Debug, Deserialize)]
struct RootConfig {
    services: Option<ServicesConfig>,
}

#[derive(Debug, Deserialize)]
struct ServicesConfig {
    netaddr: Option<ServiceConfig>,
}

#[derive(Debug, Deserialize)]
struct ServiceConfig {
    config: Option<HashMap<String, String>>,
}

impl NetaddrConfig {
    /// Load configuration from file and environment variables
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let mut config = Self::default();

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match serde_yaml::from_str::<RootConfig>(&content) {
                Ok(root_config) => {
                    config.apply_root_config(root_config);
                    info!("Loaded configuration from {:?}", config_path.as_ref());
                }
                Err(e) => warn!(
                    "Failed to parse config file {:?}, using defaults: {}",
                    config_path.as_ref(),
                    e
                ),
            },
            Err(_) => warn!(
                "Config file {:?} not found, using defaults",
                config_path.as_ref()
            ),
        }

        config.apply_environment_overrides();
        Ok(config)
    }

    /// Defaults plus environment variables
    pub fn from_environment() -> Self {
        let mut config = Self::default();
        config.apply_environment_overrides();
        config
    }

    fn apply_root_config(&mut self, root_config: RootConfig) {
        let Some(config_map) = root_config
            .services
            .and_then(|services| services.netaddr)
            .and_then(|service| service.config)
        else {
            return;
        };

        for (key, value) in config_map {
            match key.as_str() {
                "services.netaddr.output" => match value.parse() {
                    Ok(output) => self.output = output,
                    Err(e) => warn!("Ignoring {}: {}", key, e),
                },
                "services.netaddr.max_hosts" => match value.parse() {
                    Ok(max_hosts) => self.max_hosts = max_hosts,
                    Err(_) => warn!("Ignoring {}: not a number: {}", key, value),
                },
                _ => {
                    // Ignore unknown configuration keys
                }
            }
        }
    }

    fn apply_environment_overrides(&mut self) {
        if let Ok(output) = std::env::var("NETADDR_OUTPUT") {
            if let Ok(output) = output.parse() {
                self.output = output;
                info!("Output format overridden by environment: {:?}", output);
            }
        }

        if let Ok(max_hosts) = std::env::var("NETADDR_MAX_HOSTS") {
            if let Ok(max_hosts) = max_hosts.parse::<usize>() {
                self.max_hosts = max_hosts;
                info!("Host limit overridden by environment: {}", max_hosts);
            }
        }
    }
}
