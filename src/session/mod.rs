pub mod busy;

pub use busy::{BusyFlag, BusyGuard};

use std::path::{Path, PathBuf};

use tracing::error;

use crate::api::{FilePayload, MinutesService};
use crate::error::{AppError, AppResult};
use crate::minutes::export;
use crate::minutes::model::{GenerationRequest, MeetingResult};

/// Version stamp of a captured input. An ingestion completion is applied
/// only while its stamp still matches the modality's current capture, so a
/// stale response cannot overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureStamp(u64);

#[derive(Debug, Default)]
struct ModalitySlot {
    derived: Option<String>,
    capture: u64,
}

impl ModalitySlot {
    fn begin_capture(&mut self) -> CaptureStamp {
        self.capture += 1;
        CaptureStamp(self.capture)
    }

    fn apply(&mut self, stamp: CaptureStamp, text: String) -> bool {
        if stamp.0 != self.capture {
            return false;
        }
        self.derived = Some(text);
        true
    }
}

/// Holds the captured inputs, their derived texts, and the current meeting
/// record for one session. All three network operations share one busy flag;
/// only one is in progress at a time.
#[derive(Debug, Default)]
pub struct MeetingSession {
    audio: ModalitySlot,
    image: ModalitySlot,
    notes: String,
    result: Option<MeetingResult>,
    busy: BusyFlag,
}

impl MeetingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn audio_transcript(&self) -> Option<&str> {
        self.audio.derived.as_deref()
    }

    pub fn image_analysis(&self) -> Option<&str> {
        self.image.derived.as_deref()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn result(&self) -> Option<&MeetingResult> {
        self.result.as_ref()
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Registers a new audio capture. The returned stamp must accompany the
    /// eventual completion; completions carrying an older stamp are
    /// discarded.
    pub fn begin_audio_capture(&mut self) -> CaptureStamp {
        self.audio.begin_capture()
    }

    pub fn begin_image_capture(&mut self) -> CaptureStamp {
        self.image.begin_capture()
    }

    /// Returns whether the transcript was applied (false for a stale stamp).
    pub fn apply_transcript(&mut self, stamp: CaptureStamp, text: String) -> bool {
        self.audio.apply(stamp, text)
    }

    pub fn apply_image_analysis(&mut self, stamp: CaptureStamp, text: String) -> bool {
        self.image.apply(stamp, text)
    }

    /// Sends a captured audio file for transcription and stores the derived
    /// text. On failure the prior transcript, the other modality, and any
    /// existing result are left untouched.
    pub async fn ingest_audio<S: MinutesService + Sync>(
        &mut self,
        service: &S,
        payload: FilePayload,
    ) -> AppResult<String> {
        let _permit = self.busy.acquire("audio ingestion")?;
        let stamp = self.begin_audio_capture();

        let text = service.transcribe(payload).await.inspect_err(|err| {
            error!("audio transcription failed: {}", err.surface_message());
        })?;

        self.apply_transcript(stamp, text.clone());
        Ok(text)
    }

    /// Sends a captured image for analysis and stores the derived text.
    pub async fn ingest_image<S: MinutesService + Sync>(
        &mut self,
        service: &S,
        payload: FilePayload,
    ) -> AppResult<String> {
        let _permit = self.busy.acquire("image ingestion")?;
        let stamp = self.begin_image_capture();

        let text = service.analyze_image(payload).await.inspect_err(|err| {
            error!("image analysis failed: {}", err.surface_message());
        })?;

        self.apply_image_analysis(stamp, text.clone());
        Ok(text)
    }

    /// The combined request built fresh from current state; blank inputs are
    /// absent rather than empty strings.
    pub fn generation_request(&self) -> GenerationRequest {
        fn non_empty(value: Option<&str>) -> Option<String> {
            value.filter(|text| !text.is_empty()).map(str::to_owned)
        }

        GenerationRequest {
            audio_transcript: non_empty(self.audio_transcript()),
            image_analysis: non_empty(self.image_analysis()),
            text_input: non_empty(Some(self.notes.as_str())),
        }
    }

    /// Runs the aggregation call. Rejects locally without a network call
    /// when all three inputs are empty. On success the stored result is
    /// replaced wholesale; on failure the prior result is preserved.
    pub async fn generate<S: MinutesService + Sync>(
        &mut self,
        service: &S,
    ) -> AppResult<&MeetingResult> {
        let request = self.generation_request();
        if request.is_empty() {
            return Err(AppError::Validation(
                "at least one input is required".to_owned(),
            ));
        }

        let _permit = self.busy.acquire("generation")?;

        let result = service.generate_minutes(&request).await.inspect_err(|err| {
            error!("minutes generation failed: {}", err.surface_message());
        })?;

        Ok(self.result.insert(result))
    }

    /// The portable export document, or `None` when no result exists yet
    /// (export is a no-op without a result).
    pub fn export_document(&self) -> Option<String> {
        self.result.as_ref().map(export::render_document)
    }

    /// Writes the export artifact into `dir`; `None` when there is nothing
    /// to export.
    pub fn export_to(&self, dir: &Path) -> AppResult<Option<PathBuf>> {
        match self.result.as_ref() {
            Some(result) => export::write_document(dir, result).map(Some),
            None => Ok(None),
        }
    }
}
