use super::text::normalize_token;
use serde::{Deserialize, Serialize};

/// Canonical pipeline stages. Prospect stages and template use-cases arrive
/// as free text in mixed French/English vocabulary; both are folded onto
/// these variants before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Discovery,
    FollowUp,
    Proposal,
    Audit,
    CrossSell,
}

impl PipelineStage {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Discovery,
            Self::FollowUp,
            Self::Proposal,
            Self::Audit,
            Self::CrossSell,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Discovery => "Discovery",
            Self::FollowUp => "Follow-up",
            Self::Proposal => "Proposal",
            Self::Audit => "Audit",
            Self::CrossSell => "Cross-sell",
        }
    }

    /// Normalized-token synonyms accepted for this stage.
    const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Discovery => &[
                "discovery",
                "decouverte",
                "ouverture",
                "opening",
                "prise de contact",
                "initial",
                "initial contact",
            ],
            Self::FollowUp => &["follow up", "relance", "suivi", "tracking"],
            Self::Proposal => &["proposal", "proposition", "offre", "offer"],
            Self::Audit => &["audit", "diagnostic"],
            Self::CrossSell => &["cross sell", "cross", "upsell", "crossell"],
        }
    }

    /// Folds free text onto a canonical stage, tolerant of casing, accents
    /// and punctuation ("Découverte", "cross-sell", "Follow-Up").
    pub fn parse(raw: &str) -> Option<Self> {
        let token = normalize_token(raw);
        if token.is_empty() {
            return None;
        }
        Self::ordered()
            .into_iter()
            .find(|stage| stage.synonyms().contains(&token.as_str()))
    }
}

/// True iff a template's use-case vocabulary matches the prospect's stage.
/// Falls back to plain normalized equality when neither side maps to a
/// canonical stage, so unknown-but-identical vocabularies still pair up.
pub(crate) fn stage_matches(use_case: Option<&str>, stage: Option<&str>) -> bool {
    let (Some(use_case), Some(stage)) = (use_case, stage) else {
        return false;
    };

    match (PipelineStage::parse(use_case), PipelineStage::parse(stage)) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        _ => {
            let lhs = normalize_token(use_case);
            let rhs = normalize_token(stage);
            !lhs.is_empty() && lhs == rhs
        }
    }
}
