use std::path::PathBuf;

use crate::bootstrap::AppPaths;
use crate::config::schema::AppConfig;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub export_dir: Option<PathBuf>,
}

pub fn load_config(paths: &AppPaths, overrides: &CliOverrides) -> AppResult<AppConfig> {
    let config_path = overrides
        .config_path
        .clone()
        .unwrap_or_else(|| paths.config_file.clone());

    let mut config = if config_path.exists() {
        let raw = std::fs::read_to_string(&config_path)?;
        toml::from_str::<AppConfig>(&raw)?
    } else {
        let defaults = AppConfig::default();
        write_default_config(&config_path, &defaults)?;
        defaults
    };

    if config.export.directory.is_none() {
        config.export.directory = Some(paths.export_dir.clone());
    }

    apply_env_overrides(&mut config);
    apply_cli_overrides(&mut config, overrides);

    validate(&config)?;
    Ok(config)
}

fn write_default_config(path: &PathBuf, defaults: &AppConfig) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let data = toml::to_string_pretty(defaults)?;
    std::fs::write(path, data)?;
    Ok(())
}

fn validate(config: &AppConfig) -> AppResult<()> {
    if config.api.timeout_seconds == 0 {
        return Err(AppError::Config(
            "api.timeout_seconds must be > 0".to_owned(),
        ));
    }

    let base = config.api.base_url.trim();
    if base.is_empty() {
        return Err(AppError::Config("api.base_url must not be empty".to_owned()));
    }
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(AppError::Config(format!(
            "api.base_url must start with http:// or https://, got `{base}`"
        )));
    }

    Ok(())
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(value) = std::env::var("GIJIROKU_BASE_URL") {
        if !value.trim().is_empty() {
            config.api.base_url = value;
        }
    }
    if let Ok(value) = std::env::var("GIJIROKU_TIMEOUT_SECONDS") {
        if let Ok(parsed) = value.parse::<u64>() {
            config.api.timeout_seconds = parsed;
        }
    }
    if let Ok(value) = std::env::var("GIJIROKU_EXPORT_DIR") {
        if !value.trim().is_empty() {
            config.export.directory = Some(PathBuf::from(value));
        }
    }
    if let Ok(value) = std::env::var("GIJIROKU_LOG_LEVEL") {
        config.diagnostics.log_level = value;
    }
}

fn apply_cli_overrides(config: &mut AppConfig, overrides: &CliOverrides) {
    if let Some(value) = &overrides.base_url {
        config.api.base_url = value.clone();
    }
    if let Some(value) = overrides.timeout_seconds {
        config.api.timeout_seconds = value;
    }
    if let Some(value) = &overrides.export_dir {
        config.export.directory = Some(value.clone());
    }
}
