use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub config_file: PathBuf,
    pub export_dir: PathBuf,
}

impl AppPaths {
    pub fn resolve() -> AppResult<Self> {
        let project_dirs = ProjectDirs::from("io", "gijiroku", "gijiroku")
            .ok_or_else(|| AppError::Config("unable to resolve project directories".to_owned()))?;

        let config_dir = project_dirs.config_dir().to_path_buf();
        let data_dir = project_dirs.data_local_dir().to_path_buf();
        let cache_dir = project_dirs.cache_dir().to_path_buf();

        let config_file = config_dir.join("config.toml");
        let export_dir = data_dir.join("exports");

        Ok(Self {
            config_dir,
            data_dir,
            cache_dir,
            config_file,
            export_dir,
        })
    }

    pub fn ensure_dirs(&self) -> AppResult<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.cache_dir)?;
        std::fs::create_dir_all(&self.export_dir)?;
        Ok(())
    }
}
