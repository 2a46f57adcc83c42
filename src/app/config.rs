//! Bot-side configuration for the chat collaborator.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

const DEFAULT_TOKEN_FILE: &str = "token.txt";
const DEFAULT_QUESTION_TIMEOUT_SECS: u64 = 60;

/// Startup configuration parsed from a TOML file: where the credential
/// lives, where finished advertisements go, and who may request one.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// File holding the bot credential (defaults to `token.txt`).
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
    /// Channel the finished advertisement is posted to.
    pub channel_id: u64,
    /// Role a requester must hold to run the create command.
    pub required_role: String,
    /// Patience per interview question before aborting with a timeout.
    #[serde(default = "default_question_timeout")]
    pub question_timeout_secs: u64,
}

fn default_token_file() -> PathBuf {
    PathBuf::from(DEFAULT_TOKEN_FILE)
}

fn default_question_timeout() -> u64 {
    DEFAULT_QUESTION_TIMEOUT_SECS
}

impl BotConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read bot config {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: BotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.required_role.trim().is_empty() {
            return Err(AppError::config_error("required_role must not be blank"));
        }
        if self.channel_id == 0 {
            return Err(AppError::config_error("channel_id must name a real channel"));
        }
        Ok(())
    }
}
