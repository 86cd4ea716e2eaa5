//! Layered settings for Mailroom
//!
//! A settings type is resolved from three sources, later ones winning:
//! 1. Its `Default` impl
//! 2. A JSON file in the config directory (~/.config/mailroom/)
//! 3. `MAILROOM_*` environment variables
//!
//! Implement [`Layered`] for the settings type and call [`load`].
//! Call [`init`] at application startup to bootstrap the config directory.

use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the config directory under the platform config root
const APP_DIR: &str = "mailroom";

/// Prefix shared by every override variable
pub const ENV_PREFIX: &str = "MAILROOM_";

/// A settings type that can be loaded in layers
pub trait Layered: DeserializeOwned + Default {
    /// File name within the config directory
    const FILE: &'static str;

    /// Apply overrides on top of the defaults and file values
    fn apply_overrides(&mut self, env: &EnvOverrides) -> Result<()>;
}

type LookupFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Source of `MAILROOM_*` override values
///
/// Names passed to the accessors are given without the prefix.
pub struct EnvOverrides {
    lookup: Box<LookupFn>,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    pub fn from_process() -> Self {
        Self::from_fn(|key| std::env::var(key).ok())
    }

    /// Read overrides through a custom lookup keyed by full variable name
    pub fn from_fn(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Full variable name for a setting
    pub fn key(name: &str) -> String {
        format!("{}{}", ENV_PREFIX, name)
    }

    /// Raw value of an override, if set
    pub fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(&Self::key(name))
    }

    /// Parse an override with `FromStr`
    pub fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("Invalid {}: '{}' ({})", Self::key(name), raw, e))
    }

    /// Parse a boolean override (`1/0`, `true/false`, `yes/no`, `on/off`)
    pub fn flag(&self, name: &str) -> Result<Option<bool>> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(anyhow!("Invalid {}: expected a boolean, got '{}'", Self::key(name), raw)),
        }
    }
}

/// Initialize the Mailroom config directory.
///
/// Creates ~/.config/mailroom/ if it doesn't exist.
pub fn init() -> Result<PathBuf> {
    let dir = config_dir().context("Could not determine config directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    Ok(dir)
}

/// Get the Mailroom config directory (~/.config/mailroom/)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Load settings from the config directory and the process environment
pub fn load<T: Layered>() -> Result<T> {
    let path = config_dir().map(|dir| dir.join(T::FILE));
    load_from(path.as_deref(), &EnvOverrides::from_process())
}

/// Load settings from an explicit file path and override source
///
/// A missing file is not an error; the defaults are used instead.
pub fn load_from<T: Layered>(path: Option<&Path>, env: &EnvOverrides) -> Result<T> {
    let mut value = match path {
        Some(path) if path.exists() => read_json(path)?,
        _ => T::default(),
    };
    value.apply_overrides(env)?;
    Ok(value)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        name: String,
        port: u16,
        verbose: bool,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                port: 80,
                verbose: false,
            }
        }
    }

    impl Layered for Sample {
        const FILE: &'static str = "sample.json";

        fn apply_overrides(&mut self, env: &EnvOverrides) -> Result<()> {
            if let Some(port) = env.parse("PORT")? {
                self.port = port;
            }
            if let Some(verbose) = env.flag("VERBOSE")? {
                self.verbose = verbose;
            }
            Ok(())
        }
    }

    fn env(pairs: &[(&str, &str)]) -> EnvOverrides {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvOverrides::from_fn(move |key| map.get(key).cloned())
    }

    #[test]
    fn test_config_dir() {
        let dir = config_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().ends_with("mailroom"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let sample: Sample = load_from(Some(&dir.path().join(Sample::FILE)), &env(&[])).unwrap();
        assert_eq!(sample, Sample::default());

        let sample: Sample = load_from(None, &env(&[])).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Sample::FILE);
        std::fs::write(&path, r#"{"name": "mailroom", "port": 5000}"#).unwrap();

        let sample: Sample = load_from(Some(&path), &env(&[])).unwrap();
        assert_eq!(sample.name, "mailroom");
        assert_eq!(sample.port, 5000);
        assert!(!sample.verbose);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Sample::FILE);
        std::fs::write(&path, r#"{"port": 5000}"#).unwrap();

        let overrides = env(&[("MAILROOM_PORT", "8080"), ("MAILROOM_VERBOSE", "yes")]);
        let sample: Sample = load_from(Some(&path), &overrides).unwrap();
        assert_eq!(sample.port, 8080);
        assert!(sample.verbose);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Sample::FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_from::<Sample>(Some(&path), &env(&[])).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_overrides() {
        let err = load_from::<Sample>(None, &env(&[("MAILROOM_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("MAILROOM_PORT"));

        let err = load_from::<Sample>(None, &env(&[("MAILROOM_VERBOSE", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("expected a boolean"));
    }

    #[test]
    fn test_flag_spellings() {
        let overrides = env(&[("MAILROOM_A", " ON "), ("MAILROOM_B", "0")]);
        assert_eq!(overrides.flag("A").unwrap(), Some(true));
        assert_eq!(overrides.flag("B").unwrap(), Some(false));
        assert_eq!(overrides.flag("C").unwrap(), None);
    }
}
