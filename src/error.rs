use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("another operation is in progress: {0}")]
    Busy(String),

    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message order for surfacing a failed generation: server-supplied
    /// detail, then the transport error text, then a static fallback.
    pub fn surface_message(&self) -> String {
        match self {
            AppError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            AppError::Http(error) => error.to_string(),
            AppError::Api { status, .. } => format!("server returned status {status}"),
            other => other.to_string(),
        }
    }
}
