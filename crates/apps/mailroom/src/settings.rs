//! Server settings
//!
//! Built-in defaults, then `~/.config/mailroom/server.json`, then the
//! `MAILROOM_BIND_ADDR` and `MAILROOM_SEED_DATA` environment variables.

use anyhow::Result;
use config::{EnvOverrides, Layered};
use serde::Deserialize;
use std::net::SocketAddr;

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address the server listens on
    pub bind_addr: SocketAddr,
    /// Whether to start with the demo mailbox
    pub seed_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            seed_data: true,
        }
    }
}

impl Layered for Settings {
    const FILE: &'static str = "server.json";

    fn apply_overrides(&mut self, env: &EnvOverrides) -> Result<()> {
        if let Some(addr) = env.parse("BIND_ADDR")? {
            self.bind_addr = addr;
        }
        if let Some(seed) = env.flag("SEED_DATA")? {
            self.seed_data = seed;
        }
        Ok(())
    }
}

impl Settings {
    /// Load settings from the config file and environment
    pub fn load() -> Result<Self> {
        config::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> EnvOverrides {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvOverrides::from_fn(move |key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings: Settings = config::load_from(None, &env(&[])).unwrap();
        assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:5000");
        assert!(settings.seed_data);
    }

    #[test]
    fn test_env_overrides() {
        let overrides = env(&[
            ("MAILROOM_BIND_ADDR", "0.0.0.0:8080"),
            ("MAILROOM_SEED_DATA", "false"),
        ]);
        let settings: Settings = config::load_from(None, &overrides).unwrap();
        assert_eq!(settings.bind_addr.port(), 8080);
        assert!(!settings.seed_data);
    }

    #[test]
    fn test_invalid_env_is_an_error() {
        let bad_addr = env(&[("MAILROOM_BIND_ADDR", "nowhere")]);
        assert!(config::load_from::<Settings>(None, &bad_addr).is_err());

        let bad_flag = env(&[("MAILROOM_SEED_DATA", "maybe")]);
        assert!(config::load_from::<Settings>(None, &bad_flag).is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"seed_data": false}"#).unwrap();
        assert_eq!(settings.bind_addr, Settings::default().bind_addr);
        assert!(!settings.seed_data);
    }
}
