use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::minutes::model::{GenerationRequest, MeetingResult};

/// A captured audio or image artifact ready for transmission. No local
/// file-type or size validation; any rejection comes from the remote service.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.bin")
            .to_owned();
        Ok(Self { file_name, bytes })
    }
}

/// The three remote collaborators behind one seam so the session can be
/// exercised without a network.
#[async_trait]
pub trait MinutesService {
    async fn transcribe(&self, payload: FilePayload) -> AppResult<String>;
    async fn analyze_image(&self, payload: FilePayload) -> AppResult<String>;
    async fn generate_minutes(&self, request: &GenerationRequest) -> AppResult<MeetingResult>;
}

#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    transcript: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeImageResponse {
    analysis: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn post_file(&self, endpoint: &str, payload: FilePayload) -> AppResult<String> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!("uploading {} ({} bytes) to {url}", payload.file_name, payload.bytes.len());

        let part = reqwest::multipart::Part::bytes(payload.bytes).file_name(payload.file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        read_success_body(response).await
    }

    async fn post_json(&self, endpoint: &str, request: &GenerationRequest) -> AppResult<String> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!("posting generation request to {url}");

        let response = self.client.post(&url).json(request).send().await?;
        read_success_body(response).await
    }
}

#[async_trait]
impl MinutesService for ApiClient {
    async fn transcribe(&self, payload: FilePayload) -> AppResult<String> {
        let body = self.post_file("/api/transcribe", payload).await?;
        let parsed: TranscribeResponse = parse_body(&body)?;
        Ok(parsed.transcript)
    }

    async fn analyze_image(&self, payload: FilePayload) -> AppResult<String> {
        let body = self.post_file("/api/analyze-image", payload).await?;
        let parsed: AnalyzeImageResponse = parse_body(&body)?;
        Ok(parsed.analysis)
    }

    async fn generate_minutes(&self, request: &GenerationRequest) -> AppResult<MeetingResult> {
        let body = self.post_json("/api/generate-minutes", request).await?;
        parse_body(&body)
    }
}

async fn read_success_body(response: reqwest::Response) -> AppResult<String> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(body);
    }

    let detail = extract_detail(&body);
    warn!("request failed with status {status}: {}", detail.as_deref().unwrap_or(""));
    Err(AppError::Api {
        status: status.as_u16(),
        message: detail.unwrap_or_default(),
    })
}

/// The generation endpoint's error body optionally carries a `detail`
/// field used preferentially as the surfaced message.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .filter(|detail| !detail.trim().is_empty())
}

/// Any missing expected field is a malformed response, never a silent
/// default.
fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|error| AppError::MalformedResponse(error.to_string()))
}
