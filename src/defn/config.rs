use crate::dictionary::RemovePolicy;
use crate::error::{DictError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "defn.json";
const DEFAULT_DICTIONARY_FILE: &str = "dictionary.txt";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_REQUEST_LOG: &str = "api.log";

/// Configuration for defn, stored in `defn.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefnConfig {
    /// Backing text file holding one `word: definition` per line
    #[serde(default = "default_dictionary_file")]
    pub dictionary_file: PathBuf,

    /// Whether removing an unknown word is an error
    #[serde(default)]
    pub remove_policy: RemovePolicy,

    /// Listen address for `defn serve`
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// File receiving one line per HTTP request
    #[serde(default = "default_request_log")]
    pub request_log: PathBuf,

    /// HMAC secret for bearer tokens. Without it the HTTP API is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt_secret: Option<String>,
}

fn default_dictionary_file() -> PathBuf {
    PathBuf::from(DEFAULT_DICTIONARY_FILE)
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_request_log() -> PathBuf {
    PathBuf::from(DEFAULT_REQUEST_LOG)
}

impl Default for DefnConfig {
    fn default() -> Self {
        Self {
            dictionary_file: default_dictionary_file(),
            remove_policy: RemovePolicy::default(),
            bind_addr: default_bind_addr(),
            request_log: default_request_log(),
            jwt_secret: None,
        }
    }
}

impl DefnConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DictError::Io)?;
        let config: DefnConfig =
            serde_json::from_str(&content).map_err(DictError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DictError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DictError::Serialization)?;
        fs::write(config_path, content).map_err(DictError::Io)?;
        Ok(())
    }

    /// Apply `DEFN_FILE`, `DEFN_BIND_ADDR` and `DEFN_JWT_SECRET` from `lookup`.
    ///
    /// Takes the lookup as a function so callers pass `std::env::var(..).ok()`
    /// and tests pass a map.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = lookup("DEFN_FILE").filter(|v| !v.is_empty()) {
            self.dictionary_file = PathBuf::from(file);
        }
        if let Some(addr) = lookup("DEFN_BIND_ADDR").filter(|v| !v.is_empty()) {
            self.bind_addr = addr;
        }
        if let Some(secret) = lookup("DEFN_JWT_SECRET").filter(|v| !v.is_empty()) {
            self.jwt_secret = Some(secret);
        }
        self
    }
}
