use std::fs;
use std::path::Path;

use crate::app::config::BotConfig;
use crate::domain::AppError;

/// Startup state for the chat collaborator: validated configuration plus
/// the credential read once from disk. Dropping the context is the
/// teardown; nothing else is held open.
#[derive(Debug)]
pub struct AppContext {
    config: BotConfig,
    token: String,
}

impl AppContext {
    /// Load the configuration file and the credential it points at.
    pub fn initialize(config_path: &Path) -> Result<Self, AppError> {
        let config = BotConfig::load(config_path)?;
        let token = load_token(&config.token_file)?;
        Ok(Self { config, token })
    }

    /// Build a context from an already-validated config and credential.
    pub fn new(config: BotConfig, token: String) -> Self {
        Self { config, token }
    }

    /// Get a reference to the bot configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Get the credential string.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether a requester holding `top_role` may run the create command.
    /// The comparison is exact and case-sensitive.
    pub fn authorizes(&self, top_role: &str) -> bool {
        top_role == self.config.required_role
    }
}

/// Read the bot credential, trimming the trailing newline editors append.
pub fn load_token(path: &Path) -> Result<String, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read credential file {}: {}", path.display(), e))
    })?;
    Ok(raw.trim_end().to_string())
}
