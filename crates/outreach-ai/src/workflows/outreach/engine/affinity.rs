use super::weights::ScoringWeights;
use super::FormationAffinity;
use crate::workflows::outreach::domain::{Formation, Prospect};
use crate::workflows::outreach::text::{normalize_token, string_list};

pub(crate) fn score_formation(
    prospect: &Prospect,
    formation: &Formation,
    weights: &ScoringWeights,
) -> FormationAffinity {
    let mut score = 0;
    let mut reasons = Vec::new();

    let formation_sectors = string_list(&formation.sectors);
    let formation_formats = string_list(&formation.format);
    let formation_keywords = string_list(&formation.keywords);
    let prospect_sector = normalize_token(prospect.sector.as_deref().unwrap_or(""));
    let preferred_format = normalize_token(prospect.preferred_format.as_deref().unwrap_or(""));
    let training_history = normalize_token(prospect.training_history.as_deref().unwrap_or(""));

    if !prospect_sector.is_empty()
        && formation_sectors
            .iter()
            .any(|sector| normalize_token(sector) == prospect_sector)
    {
        score += weights.formation_sector;
        reasons.push(format!(
            "training aligned with the {} sector",
            prospect.sector.as_deref().unwrap_or_default()
        ));
    }

    if !preferred_format.is_empty()
        && formation_formats
            .iter()
            .any(|format| normalize_token(format) == preferred_format)
    {
        score += weights.formation_format;
        reasons.push(format!(
            "{} delivery matches the prospect preference",
            prospect.preferred_format.as_deref().unwrap_or_default()
        ));
    }

    let formation_domain = normalize_token(formation.domain.as_deref().unwrap_or(""));
    if !formation_domain.is_empty() && training_history.contains(&formation_domain) {
        score += weights.formation_history;
        reasons.push("prospect history overlaps this training domain".to_string());
    }

    if !formation_keywords.is_empty()
        && !training_history.is_empty()
        && formation_keywords.iter().any(|keyword| {
            let token = normalize_token(keyword);
            !token.is_empty() && training_history.contains(&token)
        })
    {
        score += weights.formation_keywords;
        reasons.push("training keywords found in the prospect history".to_string());
    }

    // Sector-agnostic offerings stay visible in discovery, but the bonus
    // never stacks on a real match.
    if score == 0 && formation_sectors.is_empty() {
        score += weights.formation_generalist;
        reasons.push("general-audience training suitable for discovery".to_string());
    }

    FormationAffinity { score, reasons }
}
