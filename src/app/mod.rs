pub mod cli;
pub mod commands;
pub mod config;
mod context;

pub use config::BotConfig;
pub use context::{AppContext, load_token};
