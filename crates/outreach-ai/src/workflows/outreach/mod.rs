pub mod domain;
mod engine;
mod placeholders;
pub mod report;
mod stage;
pub(crate) mod text;

pub use engine::{
    FormationAffinity, RecommendationEngine, RecommendationRequest, ScoringWeights,
    ScriptRecommendation, TemplateMatch,
};
pub use placeholders::{apply_placeholders, build_placeholders};
pub use stage::PipelineStage;
