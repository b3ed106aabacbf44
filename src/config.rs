use log::info;
use std::env;
use std::path::PathBuf;

use crate::controller::DEFAULT_TIME_LIMIT_SECS;
use crate::error::ConfigError;
use crate::model::types::Difficulty;

pub const DEFAULT_CATEGORY: &str = "general";

const TIME_LIMIT_VAR: &str = "QUIZ_TIME_LIMIT_SECS";

/// Settings for a terminal quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub category: String,
    pub difficulty: Difficulty,
    pub time_limit_secs: u32,
    /// JSON question bank; the built-in sample bank is used when unset.
    pub bank_path: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            difficulty: Difficulty::Medium,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            bank_path: None,
        }
    }
}

impl QuizConfig {
    /// Read `QUIZ_*` variables, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Missing or blank values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let default = Self::default();

        let difficulty = match get("QUIZ_DIFFICULTY") {
            Some(value) => value.parse()?,
            None => default.difficulty,
        };

        let time_limit_secs = match get(TIME_LIMIT_VAR) {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidTimeLimit {
                        var: TIME_LIMIT_VAR,
                        value,
                    });
                }
            },
            None => default.time_limit_secs,
        };

        Ok(Self {
            category: get("QUIZ_CATEGORY")
                .map(|c| c.trim().to_string())
                .unwrap_or(default.category),
            difficulty,
            time_limit_secs,
            bank_path: get("QUIZ_BANK_PATH").map(PathBuf::from),
        })
    }
}
