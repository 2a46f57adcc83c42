//! Single-request pipeline: one input source, one formatted document.

use std::io::Read;
use std::path::Path;

use crate::domain::{AppError, ConfigRecord, EnsembleRequest, FormatOptions, format_with};

/// Options shared by every single-request mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub format: FormatOptions,
    /// Emit single-line JSON instead of pretty-printed documents.
    pub compact: bool,
}

/// Render one request into its embed document JSON.
pub fn render(request: &EnsembleRequest, options: &GenerateOptions) -> Result<String, AppError> {
    let post = format_with(request, options.format)?;
    post.to_json(options.compact)
}

/// Read a config file (YAML by extension, `key=value` otherwise) and render
/// the request it describes.
pub fn from_config_file(path: &Path, options: &GenerateOptions) -> Result<String, AppError> {
    let content = std::fs::read_to_string(path)?;
    let record = if has_yaml_extension(path) {
        ConfigRecord::from_yaml(&content)?
    } else {
        ConfigRecord::from_key_values(&content)?
    };
    render(&record.into_request(), options)
}

/// Read one JSON request document from a reader, typically piped stdin.
pub fn from_reader<R: Read>(mut reader: R, options: &GenerateOptions) -> Result<String, AppError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let request: EnsembleRequest = serde_json::from_str(&content)?;
    render(&request, options)
}

fn has_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
    )
}
