use super::weights::ScoringWeights;
use super::{FormationAffinity, TemplateMatch};
use crate::workflows::outreach::domain::{Contact, Formation, Prospect, Template};
use crate::workflows::outreach::stage::stage_matches;
use crate::workflows::outreach::text::{
    has_intersection, includes_token, normalize_token, string_list,
};

/// Scores one template against every candidate formation and keeps the best
/// pairing. Ties keep the first-seen candidate; callers rely on input order
/// being the tie-break.
pub(crate) fn score_template(
    prospect: &Prospect,
    template: &Template,
    candidates: &[(&Formation, FormationAffinity)],
    contact: Option<&Contact>,
    weights: &ScoringWeights,
) -> TemplateMatch {
    let template_sectors = string_list(&template.sector_filter);
    let template_domains = string_list(&template.domain_filter);
    let template_formats = string_list(&template.format_filter);
    let template_audiences = string_list(&template.audience_filter);
    let contact_role = normalize_token(contact.and_then(|c| c.role.as_deref()).unwrap_or(""));
    let sector_token = normalize_token(prospect.sector.as_deref().unwrap_or(""));
    let preferred_format = normalize_token(prospect.preferred_format.as_deref().unwrap_or(""));

    let mut best_score = 0;
    let mut best_reasons: Vec<String> = Vec::new();
    let mut best_formation: Option<&Formation> = None;

    let none_affinity = FormationAffinity::default();
    let synthetic = [(None::<&Formation>, &none_affinity)];
    let pairings: Vec<(Option<&Formation>, &FormationAffinity)> = if candidates.is_empty() {
        synthetic.to_vec()
    } else {
        candidates
            .iter()
            .map(|(formation, affinity)| (Some(*formation), affinity))
            .collect()
    };

    for (formation, affinity) in pairings {
        let mut score = 0;
        let mut reasons: Vec<String> = Vec::new();

        if stage_matches(template.use_case.as_deref(), prospect.stage.as_deref()) {
            score += weights.template_stage;
            reasons.push(format!(
                "use case suited to the {} stage",
                prospect.stage.as_deref().unwrap_or_default()
            ));
        }

        if !sector_token.is_empty()
            && includes_token(
                &template_sectors,
                prospect.sector.as_deref().unwrap_or(""),
            )
        {
            score += weights.template_sector;
            reasons.push(format!(
                "script written for the {} sector",
                prospect.sector.as_deref().unwrap_or_default()
            ));
        }

        if !contact_role.is_empty()
            && template_audiences
                .iter()
                .any(|audience| normalize_token(audience) == contact_role)
        {
            score += weights.template_audience;
            reasons.push("script audience matches the targeted contact".to_string());
        }

        let formation_domain = formation.and_then(|f| f.domain.as_deref()).unwrap_or("");
        if !template_domains.is_empty() && includes_token(&template_domains, formation_domain) {
            score += weights.template_domain;
            reasons.push("training domain aligned with the script".to_string());
        } else if !template_domains.is_empty()
            && !sector_token.is_empty()
            && template_domains
                .iter()
                .any(|domain| normalize_token(domain) == sector_token)
        {
            score += weights.template_sector_as_domain;
            reasons.push("script domain matches the prospect sector".to_string());
        }

        if !template_formats.is_empty() {
            let formation_formats = formation
                .map(|f| string_list(&f.format))
                .unwrap_or_default();
            if !preferred_format.is_empty()
                && template_formats
                    .iter()
                    .any(|format| normalize_token(format) == preferred_format)
            {
                score += weights.template_format;
                reasons.push("script format consistent with the prospect preference".to_string());
            } else if has_intersection(&template_formats, &formation_formats) {
                score += weights.template_format;
                reasons.push("script format aligned with the proposed training".to_string());
            }
        }

        if affinity.score != 0 {
            score += (affinity.score as f32 * weights.affinity_carry).round() as i32;
            reasons.extend(
                affinity
                    .reasons
                    .iter()
                    .map(|reason| format!("training: {reason}")),
            );
        }

        if score > best_score {
            best_score = score;
            best_reasons = reasons;
            best_formation = formation;
        }
    }

    TemplateMatch {
        formation: best_formation.cloned(),
        score: best_score,
        reasons: best_reasons,
    }
}
