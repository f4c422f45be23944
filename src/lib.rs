pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod minutes;
pub mod session;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::api::{ApiClient, FilePayload};
use crate::bootstrap::AppPaths;
use crate::cli::{Cli, Command};
use crate::config::{load_config, AppConfig};
use crate::error::AppResult;
use crate::minutes::render;
use crate::session::MeetingSession;

#[derive(Debug, Clone, Default)]
struct GenerateOptions {
    audio: Option<PathBuf>,
    image: Option<PathBuf>,
    notes: Option<String>,
    notes_file: Option<PathBuf>,
    json: bool,
    export: Option<PathBuf>,
}

trait CommandExecutor {
    fn generate(&self, config: &AppConfig, options: GenerateOptions) -> AppResult<()>;
    fn transcribe(&self, config: &AppConfig, file: &Path) -> AppResult<()>;
    fn analyze_image(&self, config: &AppConfig, file: &Path) -> AppResult<()>;
}

struct DefaultCommandExecutor;

impl CommandExecutor for DefaultCommandExecutor {
    fn generate(&self, config: &AppConfig, options: GenerateOptions) -> AppResult<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async {
            let client = ApiClient::new(&config.api)?;
            let mut session = MeetingSession::new();

            if let Some(path) = &options.audio {
                let payload = FilePayload::from_path(path)?;
                let transcript = session.ingest_audio(&client, payload).await?;
                info!("audio transcribed ({} chars)", transcript.len());
            }

            if let Some(path) = &options.image {
                let payload = FilePayload::from_path(path)?;
                let analysis = session.ingest_image(&client, payload).await?;
                info!("image analyzed ({} chars)", analysis.len());
            }

            if let Some(path) = &options.notes_file {
                session.set_notes(std::fs::read_to_string(path)?);
            } else if let Some(notes) = &options.notes {
                session.set_notes(notes.clone());
            }

            let result = session.generate(&client).await?;

            if options.json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                print!("{}", render::render(Some(result)));
            }

            if let Some(requested) = &options.export {
                let dir = resolve_export_dir(config, requested);
                if let Some(path) = session.export_to(&dir)? {
                    println!("Exported {}", path.display());
                }
            }

            Ok(())
        })
    }

    fn transcribe(&self, config: &AppConfig, file: &Path) -> AppResult<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async {
            let client = ApiClient::new(&config.api)?;
            let mut session = MeetingSession::new();
            let payload = FilePayload::from_path(file)?;
            let transcript = session.ingest_audio(&client, payload).await?;
            println!("{transcript}");
            Ok(())
        })
    }

    fn analyze_image(&self, config: &AppConfig, file: &Path) -> AppResult<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async {
            let client = ApiClient::new(&config.api)?;
            let mut session = MeetingSession::new();
            let payload = FilePayload::from_path(file)?;
            let analysis = session.ingest_image(&client, payload).await?;
            println!("{analysis}");
            Ok(())
        })
    }
}

/// `--export` without a value means "use the configured directory"; the
/// current directory is the last resort.
fn resolve_export_dir(config: &AppConfig, requested: &Path) -> PathBuf {
    if !requested.as_os_str().is_empty() {
        return requested.to_path_buf();
    }
    config
        .export
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn execute_command<E: CommandExecutor>(
    command: Command,
    config: AppConfig,
    executor: &E,
) -> AppResult<()> {
    match command {
        Command::Generate {
            audio,
            image,
            notes,
            notes_file,
            json,
            export,
        } => executor.generate(
            &config,
            GenerateOptions {
                audio,
                image,
                notes,
                notes_file,
                json,
                export,
            },
        ),
        Command::Transcribe { file } => executor.transcribe(&config, &file),
        Command::AnalyzeImage { file } => executor.analyze_image(&config, &file),
    }
}

pub fn run() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    let cli = Cli::parse();

    let paths = AppPaths::resolve()?;
    paths.ensure_dirs()?;

    let config = load_config(&paths, &cli.to_overrides())?;

    execute_command(cli.command, config, &DefaultCommandExecutor)
}
