mod affinity;
mod ranker;
mod weights;

pub use weights::ScoringWeights;

use super::domain::{Contact, Formation, Prospect, SellerProfile, Template};
use super::placeholders::{apply_placeholders, build_placeholders};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subject pattern used when a template carries no `email_subject`. The
/// wording is end-user-visible sales copy and must not be rephrased.
const DEFAULT_SUBJECT: &str = "Proposition FPSG — {{company_name}}";

/// Stateless scorer applying the weight configuration to a prospect and the
/// already-fetched catalogs. Never mutates its inputs and never performs IO.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    weights: ScoringWeights,
}

/// One invocation's worth of inputs. Catalogs arrive as plain records; how
/// they were fetched is the caller's concern.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    pub prospect: Prospect,
    #[serde(default)]
    pub formations: Vec<Formation>,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub seller: Option<SellerProfile>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub top: Option<usize>,
}

/// Formation-to-prospect fit: an unbounded non-negative score plus the
/// human-readable contributions behind it. Recomputed per invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormationAffinity {
    pub score: i32,
    pub reasons: Vec<String>,
}

/// Best formation pairing found for a single template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMatch {
    pub formation: Option<Formation>,
    pub score: i32,
    pub reasons: Vec<String>,
}

/// Final unit returned to callers: the ranked template, its paired training,
/// the score trail, and fully substituted preview strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRecommendation {
    pub template: Template,
    pub formation: Option<Formation>,
    pub score: i32,
    pub reasons: Vec<String>,
    pub placeholders: BTreeMap<String, String>,
    pub subject_preview: String,
    pub email_body_preview: String,
    pub speech_preview: String,
}

impl RecommendationEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores a single training offering for a prospect.
    pub fn formation_affinity(
        &self,
        prospect: &Prospect,
        formation: &Formation,
    ) -> FormationAffinity {
        affinity::score_formation(prospect, formation, &self.weights)
    }

    /// Scores a single template, pairing it with the best candidate training.
    pub fn template_match(
        &self,
        prospect: &Prospect,
        template: &Template,
        formations: &[Formation],
        contact: Option<&Contact>,
    ) -> TemplateMatch {
        let scored: Vec<(&Formation, FormationAffinity)> = formations
            .iter()
            .map(|formation| (formation, self.formation_affinity(prospect, formation)))
            .collect();
        ranker::score_template(prospect, template, &scored, contact, &self.weights)
    }

    /// Ranks every template for a prospect and returns the top-K script
    /// recommendations with rendered previews. An empty template catalog or
    /// an effectively absent prospect yields an empty list, not an error.
    pub fn recommend(&self, request: &RecommendationRequest) -> Vec<ScriptRecommendation> {
        let RecommendationRequest {
            prospect,
            formations,
            templates,
            seller,
            contact,
            top,
        } = request;

        if templates.is_empty() || prospect.company_name.trim().is_empty() {
            return Vec::new();
        }

        let contact = contact.as_ref().or_else(|| prospect.primary_contact());
        let top = top.unwrap_or(self.weights.default_top);

        let scored: Vec<(&Formation, FormationAffinity)> = formations
            .iter()
            .map(|formation| (formation, self.formation_affinity(prospect, formation)))
            .collect();

        let mut matches: Vec<(&Template, TemplateMatch)> = templates
            .iter()
            .map(|template| {
                (
                    template,
                    ranker::score_template(prospect, template, &scored, contact, &self.weights),
                )
            })
            .filter(|(_, matched)| matched.score > 0)
            .collect();

        // Stable sort: equal scores keep catalog order.
        matches.sort_by(|a, b| b.1.score.cmp(&a.1.score));
        matches.truncate(top);

        matches
            .into_iter()
            .map(|(template, matched)| {
                let placeholders = build_placeholders(
                    prospect,
                    matched.formation.as_ref(),
                    contact,
                    seller.as_ref(),
                );
                let subject_base = template
                    .email_subject
                    .as_deref()
                    .filter(|subject| !subject.is_empty())
                    .unwrap_or(DEFAULT_SUBJECT);

                ScriptRecommendation {
                    subject_preview: apply_placeholders(subject_base, &placeholders),
                    email_body_preview: apply_placeholders(
                        template.email_body.as_deref().unwrap_or(""),
                        &placeholders,
                    ),
                    speech_preview: apply_placeholders(
                        template.speech_text.as_deref().unwrap_or(""),
                        &placeholders,
                    ),
                    template: template.clone(),
                    formation: matched.formation,
                    score: matched.score,
                    reasons: matched.reasons,
                    placeholders,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::default()
    }

    fn prospect() -> Prospect {
        Prospect {
            company_name: "ACME".to_string(),
            sector: Some("Santé".to_string()),
            stage: Some("decouverte".to_string()),
            ..Prospect::default()
        }
    }

    fn template(name: &str, sectors: &[&str]) -> Template {
        Template {
            template_name: name.to_string(),
            use_case: Some("decouverte".to_string()),
            sector_filter: sectors.iter().map(|s| s.to_string()).collect(),
            ..Template::default()
        }
    }

    #[test]
    fn empty_templates_return_empty_result() {
        let request = RecommendationRequest {
            prospect: prospect(),
            ..RecommendationRequest::default()
        };
        assert!(engine().recommend(&request).is_empty());
    }

    #[test]
    fn blank_company_name_is_treated_as_absent_prospect() {
        let request = RecommendationRequest {
            prospect: Prospect {
                company_name: "  ".to_string(),
                ..prospect()
            },
            templates: vec![template("T1", &["Santé"])],
            ..RecommendationRequest::default()
        };
        assert!(engine().recommend(&request).is_empty());
    }

    #[test]
    fn zero_scoring_templates_are_excluded() {
        let request = RecommendationRequest {
            prospect: Prospect {
                company_name: "ACME".to_string(),
                ..Prospect::default()
            },
            templates: vec![Template {
                template_name: "silent".to_string(),
                ..Template::default()
            }],
            ..RecommendationRequest::default()
        };
        assert!(engine().recommend(&request).is_empty());
    }

    #[test]
    fn top_k_truncates_in_descending_score_order() {
        // Five templates with strictly decreasing signal strength.
        let templates = vec![
            template("both", &["Santé"]), // 18 + 35
            Template {
                template_name: "sector-only".to_string(),
                sector_filter: vec!["Santé".to_string()],
                ..Template::default()
            }, // 35
            template("stage-only", &[]), // 18
            Template {
                template_name: "domain-fallback".to_string(),
                domain_filter: vec!["Santé".to_string()],
                ..Template::default()
            }, // 15
            Template {
                template_name: "nothing".to_string(),
                ..Template::default()
            }, // 0
        ];
        let request = RecommendationRequest {
            prospect: prospect(),
            templates,
            top: Some(3),
            ..RecommendationRequest::default()
        };

        let recommendations = engine().recommend(&request);
        let names: Vec<&str> = recommendations
            .iter()
            .map(|rec| rec.template.template_name.as_str())
            .collect();
        assert_eq!(names, vec!["both", "sector-only", "stage-only"]);
        assert!(recommendations
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn default_top_comes_from_weights() {
        let templates: Vec<Template> = (0..5)
            .map(|i| template(&format!("T{i}"), &["Santé"]))
            .collect();
        let request = RecommendationRequest {
            prospect: prospect(),
            templates,
            ..RecommendationRequest::default()
        };
        assert_eq!(engine().recommend(&request).len(), 3);
    }

    #[test]
    fn equal_scores_preserve_catalog_order() {
        let templates = vec![
            template("first", &["Santé"]),
            template("second", &["Santé"]),
        ];
        let request = RecommendationRequest {
            prospect: prospect(),
            templates,
            ..RecommendationRequest::default()
        };
        let names: Vec<String> = engine()
            .recommend(&request)
            .into_iter()
            .map(|rec| rec.template.template_name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn recommend_is_deterministic() {
        let request = RecommendationRequest {
            prospect: prospect(),
            formations: vec![Formation {
                title: Some("Prévention HSE".to_string()),
                domain: Some("HSE".to_string()),
                sectors: vec!["Santé".to_string()],
                ..Formation::default()
            }],
            templates: vec![template("T1", &["Santé"])],
            ..RecommendationRequest::default()
        };

        let first = engine().recommend(&request);
        let second = engine().recommend(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_subject_falls_back_to_default_pattern() {
        let request = RecommendationRequest {
            prospect: prospect(),
            templates: vec![template("T1", &["Santé"])],
            ..RecommendationRequest::default()
        };
        let recommendations = engine().recommend(&request);
        assert_eq!(recommendations[0].subject_preview, "Proposition FPSG — ACME");
    }
}
