mod api;
mod defaults;

use crate::cli::Args;
use crate::history::{DEFAULT_HISTORY_FILE, PERSONA_PROMPT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use api::{normalize_endpoint, ApiConfig};
pub use defaults::{parse_bool, API_KEY_ENV, DEFAULT_API_ENDPOINT, DEFAULT_MODEL};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub default_model: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_endpoint: String,
    pub request_timeout: Option<u64>,
    pub model: String,
    pub system_prompt: String,
    pub history_file: PathBuf,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            request_timeout: None,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: PERSONA_PROMPT.to_string(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            verbose: false,
        }
    }
}

/// Settings read from `.masterchef.yaml` (or `.yml`/`.json`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Self {
        let file_config = FileConfig::load().unwrap_or_default();
        Self::resolve(args, &file_config, |name| env::var(name).ok())
    }

    /// Merge settings: CLI args > env vars > config file > defaults
    pub fn resolve<F>(args: &Args, file_config: &FileConfig, env_var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = env_var(API_KEY_ENV);

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env_var("GROQ_API_ENDPOINT"))
            .or(file_config.api.endpoint.clone())
            .map(|endpoint| normalize_endpoint(&endpoint))
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        let request_timeout = env_var("MASTERCHEF_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .or(file_config.api.request_timeout);

        let model = args
            .model
            .clone()
            .or_else(|| env_var("GROQ_MODEL"))
            .or(file_config.model.default_model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let system_prompt = env_var("MASTERCHEF_SYSTEM_PROMPT")
            .or(file_config.model.system_prompt.clone())
            .unwrap_or_else(|| PERSONA_PROMPT.to_string());

        let history_file = args
            .history_file
            .clone()
            .or_else(|| env_var("MASTERCHEF_HISTORY_FILE").map(PathBuf::from))
            .or(file_config.history.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));

        let verbose = args.verbose
            || env_var("MASTERCHEF_VERBOSE")
                .map(|v| parse_bool(&v))
                .or(file_config.session.verbose)
                .unwrap_or(false);

        Config {
            api_key,
            api_endpoint,
            request_timeout,
            model,
            system_prompt,
            history_file,
            verbose,
        }
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                let config: FileConfig = if path.extension().and_then(|s| s.to_str())
                    == Some("json")
                {
                    serde_json::from_str(&contents).with_context(|| {
                        format!("Failed to parse JSON config file: {}", path.display())
                    })?
                } else {
                    serde_yaml::from_str(&contents).with_context(|| {
                        format!("Failed to parse YAML config file: {}", path.display())
                    })?
                };

                return Ok(config);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".masterchef.yaml"),
            PathBuf::from(".masterchef.yml"),
            PathBuf::from(".masterchef.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("masterchef");
            paths.push(config_dir.join("masterchef.yaml"));
            paths.push(config_dir.join("masterchef.yml"));
            paths.push(config_dir.join("masterchef.json"));
        }

        paths
    }
}
