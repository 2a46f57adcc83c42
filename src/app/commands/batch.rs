//! CSV batch pipeline: one advertisement document per data row.
//!
//! A malformed row is logged and skipped; the rest of the batch still
//! runs. Only file-level problems (unreadable input, missing columns,
//! unwritable output) fail the whole command.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::commands::generate::{GenerateOptions, render};
use crate::domain::{AppError, CsvColumns, EnsembleRequest};

/// Options for a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Write one `{index:03}_{song}.json` per row here instead of stdout.
    pub output_dir: Option<PathBuf>,
    pub generate: GenerateOptions,
}

/// Row counters reported after a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub produced: usize,
    pub skipped: usize,
}

/// Process every data row of the CSV at `path`.
pub fn execute(path: &Path, options: &BatchOptions) -> Result<BatchSummary, AppError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns = CsvColumns::locate(reader.headers()?)?;

    if let Some(dir) = &options.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut summary = BatchSummary { produced: 0, skipped: 0 };
    for (index, row) in reader.records().enumerate() {
        let number = index + 1;
        let outcome = row
            .map_err(AppError::from)
            .and_then(|record| columns.request_from_row(&record))
            .and_then(|request| emit_row(&request, number, options));
        match outcome {
            Ok(()) => summary.produced += 1,
            Err(e) => {
                warn!("skipping row {number}: {e}");
                summary.skipped += 1;
            }
        }
    }
    info!("batch finished: {} produced, {} skipped", summary.produced, summary.skipped);
    Ok(summary)
}

fn emit_row(
    request: &EnsembleRequest,
    number: usize,
    options: &BatchOptions,
) -> Result<(), AppError> {
    let json = render(request, &options.generate)?;

    match &options.output_dir {
        Some(dir) => {
            let filename =
                format!("{:03}_{}.json", number, sanitized_file_stem(&request.song_title));
            fs::write(dir.join(&filename), &json)?;
            println!("Generated JSON for '{}' -> {}", request.song_title, filename);
        }
        None => {
            println!("\n--- Ensemble {}: {} ---", number, request.song_title);
            println!("{json}");
            println!("\n{}", "=".repeat(50));
        }
    }
    Ok(())
}

/// Keep alphanumerics, spaces, hyphens, and underscores from the song
/// title, trim, then turn spaces into underscores.
fn sanitized_file_stem(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim().replace(' ', "_")
}
