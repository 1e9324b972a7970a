use outreach_ai::workflows::outreach::domain::{Contact, Formation, Prospect, Template};
use outreach_ai::workflows::outreach::report::OutreachCoverage;
use outreach_ai::workflows::outreach::{RecommendationEngine, RecommendationRequest};

fn sample_prospect() -> Prospect {
    Prospect {
        company_name: "ACME Industrie".to_string(),
        sector: Some("Santé".to_string()),
        preferred_format: Some("Distanciel".to_string()),
        stage: Some("discovery".to_string()),
        contacts: vec![Contact {
            name: Some("Claire Martin".to_string()),
            role: Some("DRH".to_string()),
            ..Contact::default()
        }],
        ..Prospect::default()
    }
}

fn sample_formation() -> Formation {
    Formation {
        title: Some("Prévention des risques".to_string()),
        domain: Some("HSE".to_string()),
        format: vec!["Distanciel".to_string()],
        duration: Some("2 jours".to_string()),
        sectors: vec!["Santé".to_string()],
        ..Formation::default()
    }
}

fn sample_template() -> Template {
    Template {
        template_name: "T1".to_string(),
        use_case: Some("decouverte".to_string()),
        sector_filter: vec!["Santé".to_string()],
        format_filter: vec!["Distanciel".to_string()],
        email_subject: Some("Hi {{company_name}}".to_string()),
        email_body: Some(
            "Bonjour {{contact_name}}, notre formation {{formation_title}} ({{duration}}, {{format}}) cible le secteur {{sector}}.".to_string(),
        ),
        ..Template::default()
    }
}

#[test]
fn matching_catalog_produces_a_fully_rendered_recommendation() {
    let engine = RecommendationEngine::default();
    let request = RecommendationRequest {
        prospect: sample_prospect(),
        formations: vec![sample_formation()],
        templates: vec![sample_template()],
        ..RecommendationRequest::default()
    };

    let recommendations = engine.recommend(&request);
    assert_eq!(recommendations.len(), 1);

    let rec = &recommendations[0];
    // 18 (stage) + 35 (sector) + 14 (format) + 30 (half of the 60-point
    // training affinity: 40 sector + 20 format).
    assert_eq!(rec.score, 97);
    assert_eq!(rec.subject_preview, "Hi ACME Industrie");
    assert_eq!(
        rec.email_body_preview,
        "Bonjour Claire Martin, notre formation Prévention des risques (2 jours, Distanciel) cible le secteur Santé."
    );
    assert_eq!(
        rec.formation.as_ref().and_then(|f| f.title.as_deref()),
        Some("Prévention des risques")
    );
    assert!(!rec.reasons.is_empty());
    assert!(!rec.email_body_preview.contains("{{"));
}

#[test]
fn stage_vocabulary_bridges_french_and_english() {
    let engine = RecommendationEngine::default();
    let mut prospect = sample_prospect();
    prospect.stage = Some("discovery".to_string());
    let mut template = sample_template();
    template.use_case = Some("decouverte".to_string());
    template.sector_filter = Vec::new();
    template.format_filter = Vec::new();

    let request = RecommendationRequest {
        prospect,
        templates: vec![template],
        ..RecommendationRequest::default()
    };

    let recommendations = engine.recommend(&request);
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].score, 18);
}

#[test]
fn repeated_runs_return_identical_rankings() {
    let engine = RecommendationEngine::default();
    let templates = vec![
        sample_template(),
        Template {
            template_name: "T2".to_string(),
            sector_filter: vec!["Santé".to_string()],
            ..Template::default()
        },
        Template {
            template_name: "T3".to_string(),
            use_case: Some("relance".to_string()),
            sector_filter: vec!["Santé".to_string()],
            ..Template::default()
        },
    ];
    let request = RecommendationRequest {
        prospect: sample_prospect(),
        formations: vec![sample_formation()],
        templates,
        ..RecommendationRequest::default()
    };

    let first = engine.recommend(&request);
    let second = engine.recommend(&request);
    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn coverage_report_aggregates_a_mixed_population() {
    let engine = RecommendationEngine::default();
    let prospects = vec![
        sample_prospect(),
        Prospect {
            company_name: "Orphan SARL".to_string(),
            sector: Some("Transport".to_string()),
            stage: Some("proposition".to_string()),
            ..Prospect::default()
        },
    ];

    // No formations: the template still scores on its own signals, so the
    // mismatched prospect stays at zero and shows up as uncovered.
    let coverage =
        OutreachCoverage::compute(&engine, &prospects, &[], &[sample_template()], None);
    let summary = coverage.summary();

    assert_eq!(summary.prospects_total, 2);
    assert_eq!(summary.prospects_covered, 1);
    assert_eq!(summary.coverage_pct, 50);
    assert_eq!(summary.top_opportunities.len(), 1);
    assert_eq!(summary.top_opportunities[0].company_name, "ACME Industrie");
    assert_eq!(summary.top_opportunities[0].score, 18 + 35 + 14);
    assert_eq!(summary.uncovered_prospects.len(), 1);
    assert_eq!(summary.uncovered_prospects[0].company_name, "Orphan SARL");
    assert_eq!(summary.use_case_distribution.len(), 1);
    assert_eq!(summary.use_case_distribution[0].use_case, "decouverte");
}
