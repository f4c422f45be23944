use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CliOverrides;

#[derive(Debug, Parser)]
#[command(name = "gijiroku")]
#[command(about = "Assemble meeting evidence and generate structured minutes")]
pub struct Cli {
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis backend.
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ingest the given inputs and generate a structured meeting record.
    Generate {
        /// Audio recording to transcribe.
        #[arg(long)]
        audio: Option<PathBuf>,

        /// Photograph (e.g. a whiteboard) to analyze.
        #[arg(long)]
        image: Option<PathBuf>,

        /// Free-text notes.
        #[arg(long, conflicts_with = "notes_file")]
        notes: Option<String>,

        /// Read the free-text notes from a file.
        #[arg(long)]
        notes_file: Option<PathBuf>,

        /// Print the meeting record as JSON instead of the text view.
        #[arg(long)]
        json: bool,

        /// Export the record as meeting-minutes.md into the given directory
        /// (defaults to the configured export directory).
        // The stock PathBuf value parser rejects empty values, which would
        // make the "" default_missing_value unrepresentable.
        #[arg(long, num_args = 0..=1, default_missing_value = "",
              value_parser = clap::builder::TypedValueParser::map(clap::builder::OsStringValueParser::new(), PathBuf::from))]
        export: Option<PathBuf>,
    },
    /// Transcribe a single audio file and print the derived text.
    Transcribe { file: PathBuf },
    /// Analyze a single image and print the derived text.
    AnalyzeImage { file: PathBuf },
}

impl Cli {
    pub fn to_overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            export_dir: None,
        }
    }
}
