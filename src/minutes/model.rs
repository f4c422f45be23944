use serde::{Deserialize, Serialize};

/// The combined generation request: one optional string per modality.
/// Unset fields are omitted from the JSON body.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GenerationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_input: Option<String>,
}

impl GenerationRequest {
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, |value| value.is_empty())
        }
        blank(&self.audio_transcript) && blank(&self.image_analysis) && blank(&self.text_input)
    }
}

/// The structured meeting record returned by the generation endpoint.
/// Replaced wholesale on each successful generation; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingResult {
    pub minutes: String,
    pub summary: String,
    pub action_items: Vec<ActionItem>,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub quality_analysis: Option<QualityAnalysis>,
}

/// All four fields are free text; any value is accepted and displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub assignee: String,
    pub deadline: String,
    pub priority: String,
}

/// Three independent percentages. They are not guaranteed to sum to 100
/// and must be scaled against their own 0-100 range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityAnalysis {
    pub scores: QualityScores,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
}

/// Dimension scores intended to range 0-100. Values are rendered as
/// received; no client-side clamping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityScores {
    pub efficiency: f64,
    pub decision_clarity: f64,
    pub action_specificity: f64,
    pub participation_balance: f64,
    pub discussion_depth: f64,
    pub overall_score: f64,
}
