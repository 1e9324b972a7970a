use super::views::{CoverageSummary, TopOpportunity, UncoveredProspect, UseCaseCount};
use crate::workflows::outreach::domain::{Formation, Prospect, Template};
use crate::workflows::outreach::engine::{
    RecommendationEngine, RecommendationRequest, ScriptRecommendation,
};
use std::collections::HashMap;

const SHORTLIST_LEN: usize = 10;
const UNTAGGED_USE_CASE: &str = "other";

/// Recommendations computed for one prospect of the analyzed population.
#[derive(Debug, Clone)]
pub struct ProspectMatch {
    pub prospect: Prospect,
    pub recommendations: Vec<ScriptRecommendation>,
}

impl ProspectMatch {
    fn leading(&self) -> Option<&ScriptRecommendation> {
        self.recommendations.first()
    }
}

/// Engine output over a whole prospect population, one run per prospect.
/// Shared catalogs are scored against every prospect; empty result lists
/// mean "no recommendable template", never an error.
#[derive(Debug, Default)]
pub struct OutreachCoverage {
    pub matches: Vec<ProspectMatch>,
}

impl OutreachCoverage {
    pub fn compute(
        engine: &RecommendationEngine,
        prospects: &[Prospect],
        formations: &[Formation],
        templates: &[Template],
        top: Option<usize>,
    ) -> Self {
        let matches = prospects
            .iter()
            .map(|prospect| {
                let request = RecommendationRequest {
                    prospect: prospect.clone(),
                    formations: formations.to_vec(),
                    templates: templates.to_vec(),
                    seller: None,
                    contact: None,
                    top,
                };
                ProspectMatch {
                    prospect: prospect.clone(),
                    recommendations: engine.recommend(&request),
                }
            })
            .collect();

        Self { matches }
    }

    pub fn summary(&self) -> CoverageSummary {
        let prospects_total = self.matches.len();
        let prospects_covered = self
            .matches
            .iter()
            .filter(|entry| !entry.recommendations.is_empty())
            .count();
        let coverage_pct = if prospects_total == 0 {
            0
        } else {
            ((prospects_covered as f32 / prospects_total as f32) * 100.0).round() as u8
        };

        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in &self.matches {
            let Some(leading) = entry.leading() else {
                continue;
            };
            let use_case = leading
                .template
                .use_case
                .clone()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| UNTAGGED_USE_CASE.to_string());
            *counts.entry(use_case).or_insert(0) += 1;
        }
        let mut use_case_distribution: Vec<UseCaseCount> = counts
            .into_iter()
            .map(|(use_case, prospects)| UseCaseCount {
                use_case,
                prospects,
            })
            .collect();
        use_case_distribution.sort_by(|a, b| {
            b.prospects
                .cmp(&a.prospects)
                .then_with(|| a.use_case.cmp(&b.use_case))
        });

        let mut top_opportunities: Vec<TopOpportunity> = self
            .matches
            .iter()
            .filter_map(|entry| {
                entry.leading().map(|leading| TopOpportunity {
                    company_name: entry.prospect.company_name.clone(),
                    sector: entry.prospect.sector.clone(),
                    template_name: leading.template.template_name.clone(),
                    score: leading.score,
                    subject_preview: leading.subject_preview.clone(),
                })
            })
            .collect();
        top_opportunities.sort_by(|a, b| b.score.cmp(&a.score));
        top_opportunities.truncate(SHORTLIST_LEN);

        let uncovered_prospects: Vec<UncoveredProspect> = self
            .matches
            .iter()
            .filter(|entry| entry.recommendations.is_empty())
            .take(SHORTLIST_LEN)
            .map(|entry| UncoveredProspect {
                company_name: entry.prospect.company_name.clone(),
                sector: entry.prospect.sector.clone(),
                stage: entry.prospect.stage.clone(),
            })
            .collect();

        CoverageSummary {
            prospects_total,
            prospects_covered,
            coverage_pct,
            use_case_distribution,
            top_opportunities,
            uncovered_prospects,
        }
    }
}
