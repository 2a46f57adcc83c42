pub mod embed;
pub mod error;
pub mod ingest;
pub mod interview;
pub mod parse;
pub mod request;

pub use embed::{
    ACCENT_COLOR, AUTHOR_LABEL, EmbedDocument, EmbedField, FormatOptions, FormattedPost,
    MentionStyle, MusicianLayout, format, format_with,
};
pub use error::AppError;
pub use ingest::{CSV_COLUMNS, ConfigRecord, CsvColumns};
pub use interview::{
    AbortReason, DONE_SENTINEL, FieldName, Interview, InterviewStep, Question, Reply,
    SKIP_SENTINEL, USE_MINE_SENTINEL,
};
pub use parse::{
    parse_comma_list, parse_musician_pairs, parse_musician_pairs_comma, parse_role_list,
};
pub use request::{DEFAULT_THUMBNAIL_URL, DEFAULT_USER_ID, EnsembleRequest, Musician};
