pub mod export;
pub mod model;
pub mod render;

pub use model::{
    ActionItem, GenerationRequest, MeetingResult, QualityAnalysis, QualityScores, Sentiment,
};
