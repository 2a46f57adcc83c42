//! ensemblegen: turn small-ensemble recruitment requests into rich-embed
//! documents, from CSV batches, config files, piped JSON, or an interview.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::commands::batch::{BatchOptions, BatchSummary};
pub use app::commands::generate::GenerateOptions;
pub use app::{AppContext, BotConfig, load_token};
pub use domain::{
    ACCENT_COLOR, AUTHOR_LABEL, AppError, DEFAULT_THUMBNAIL_URL, DEFAULT_USER_ID, EmbedDocument,
    EmbedField, EnsembleRequest, FormatOptions, FormattedPost, Interview, InterviewStep,
    MentionStyle, Musician, MusicianLayout, Question, Reply, format, format_with,
    parse_comma_list, parse_musician_pairs, parse_role_list,
};
