//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::repository::DEFAULT_DATA_FILE;

/// Environment variable that overrides `data_file`.
pub const DATA_FILE_ENV: &str = "QUIZZER_DATA";

/// Top-level quizzer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizzerConfig {
    /// JSON file holding the quizzes.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Prompt shown by the interactive shell.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Fixed seed for the play-order generator (random when unset).
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}
fn default_prompt() -> String {
    "quiz > ".to_string()
}

impl Default for QuizzerConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            prompt: default_prompt(),
            seed: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied through as-is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `quizzer.toml` in the current directory
/// 2. `~/.config/quizzer/config.toml`
///
/// `QUIZZER_DATA` overrides the data file.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizzerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizzer.toml");
        if local.exists() {
            Some(local)
        } else {
            config_dir()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizzerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => QuizzerConfig::default(),
    };

    if let Ok(data_file) = std::env::var(DATA_FILE_ENV) {
        if !data_file.trim().is_empty() {
            config.data_file = PathBuf::from(data_file);
        }
    }

    config.data_file = PathBuf::from(resolve_env_vars(&config.data_file.to_string_lossy()));

    Ok(config)
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizzer"))
}
