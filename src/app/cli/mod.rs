//! CLI Adapter.
//!
//! Input selection mirrors the historical tool: an explicit file wins, a
//! `.csv` extension switches to batch mode, `-i` runs the interview, piped
//! stdin is read as one JSON request, and a bare invocation on a terminal
//! prints usage and exits cleanly.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use log::info;

use crate::app::commands::batch::{self, BatchOptions};
use crate::app::commands::generate::{self, GenerateOptions};
use crate::app::commands::interactive;
use crate::domain::{AppError, FormatOptions, MentionStyle, MusicianLayout};

#[derive(Parser)]
#[command(name = "ensemblegen")]
#[command(version)]
#[command(
    about = "Generate recruitment embed documents for small ensembles",
    long_about = None
)]
struct Cli {
    /// Config file describing one request (YAML or key=value), or a .csv
    /// batch of them
    #[arg(short, long, value_name = "PATH", conflicts_with = "interactive")]
    file: Option<PathBuf>,

    /// Ask for every field on the terminal
    #[arg(short, long)]
    interactive: bool,

    /// Batch mode only: write one JSON file per row into this directory
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed documents
    #[arg(short, long)]
    compact: bool,

    /// Emit separate "Current Musicians" and "Musicians Needed" fields
    #[arg(long)]
    split_musicians: bool,

    /// Reference the ensemble lead with a platform mention token
    #[arg(long)]
    mention_token: bool,
}

impl Cli {
    fn generate_options(&self) -> GenerateOptions {
        let musician_layout =
            if self.split_musicians { MusicianLayout::Split } else { MusicianLayout::Merged };
        let mention_style =
            if self.mention_token { MentionStyle::Token } else { MentionStyle::PlainAt };
        GenerateOptions {
            format: FormatOptions { musician_layout, mention_style },
            compact: self.compact,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: &Cli) -> Result<(), AppError> {
    let options = cli.generate_options();

    if let Some(path) = &cli.file {
        if is_csv(path) {
            info!("processing batch file {}", path.display());
            let batch_options =
                BatchOptions { output_dir: cli.output_dir.clone(), generate: options };
            batch::execute(path, &batch_options)?;
            return Ok(());
        }

        require_no_output_dir(cli)?;
        info!("processing config file {}", path.display());
        let json = generate::from_config_file(path, &options)?;
        println!("{json}");
        return Ok(());
    }

    require_no_output_dir(cli)?;

    if cli.interactive {
        let json = interactive::execute(&options)?;
        println!("{json}");
        return Ok(());
    }

    if !io::stdin().is_terminal() {
        info!("reading request document from stdin");
        let json = generate::from_reader(io::stdin().lock(), &options)?;
        println!("{json}");
        return Ok(());
    }

    // No input source on a terminal: show usage and finish cleanly.
    Cli::command().print_help()?;
    println!();
    Ok(())
}

fn require_no_output_dir(cli: &Cli) -> Result<(), AppError> {
    if cli.output_dir.is_some() {
        return Err(AppError::config_error("--output-dir requires a .csv input file"));
    }
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("csv")
    )
}
