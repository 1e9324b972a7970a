use clap::Args;
use outreach_ai::error::AppError;
use outreach_ai::workflows::catalog::CatalogImporter;
use outreach_ai::workflows::outreach::domain::{Contact, Formation, Prospect, Template};
use outreach_ai::workflows::outreach::report::OutreachCoverage;
use outreach_ai::workflows::outreach::{
    PipelineStage, RecommendationEngine, RecommendationRequest, ScriptRecommendation,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Semicolon-delimited prospects CSV export
    #[arg(long)]
    pub(crate) prospects: PathBuf,
    /// Semicolon-delimited formations CSV export
    #[arg(long)]
    pub(crate) formations: PathBuf,
    /// Semicolon-delimited outreach templates CSV export
    #[arg(long)]
    pub(crate) templates: PathBuf,
    /// Company name of the prospect to score (case-insensitive)
    #[arg(long)]
    pub(crate) company: String,
    /// Number of recommendations to keep
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of recommendations to keep per prospect
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        prospects,
        formations,
        templates,
        company,
        top,
    } = args;

    let prospects = CatalogImporter::prospects_from_path(prospects)?;
    let formations = CatalogImporter::formations_from_path(formations)?;
    let templates = CatalogImporter::templates_from_path(templates)?;

    let selector = company.trim();
    let Some(prospect) = prospects
        .iter()
        .find(|p| p.company_name.trim().eq_ignore_ascii_case(selector))
    else {
        println!("No prospect named '{company}' in the export. Known companies:");
        for prospect in &prospects {
            println!("  - {}", prospect.company_name);
        }
        return Ok(());
    };

    let engine = RecommendationEngine::default();
    let request = RecommendationRequest {
        prospect: prospect.clone(),
        formations,
        templates,
        top,
        ..RecommendationRequest::default()
    };

    render_recommendations(prospect, &engine.recommend(&request));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { top } = args;
    let (prospects, formations, templates) = sample_catalog();

    println!("Outreach recommendation demo ({} prospects)", prospects.len());

    let engine = RecommendationEngine::default();
    let coverage = OutreachCoverage::compute(&engine, &prospects, &formations, &templates, top);
    let summary = coverage.summary();

    println!(
        "\nCoverage: {}/{} prospects ({}%)",
        summary.prospects_covered, summary.prospects_total, summary.coverage_pct
    );
    println!("Use-case distribution:");
    for entry in &summary.use_case_distribution {
        println!("  - {}: {} prospects", entry.use_case, entry.prospects);
    }
    if !summary.uncovered_prospects.is_empty() {
        println!("Uncovered prospects:");
        for entry in &summary.uncovered_prospects {
            let stage = entry
                .stage
                .as_deref()
                .and_then(PipelineStage::parse)
                .map(PipelineStage::label)
                .unwrap_or("unknown stage");
            println!(
                "  - {} ({}, {})",
                entry.company_name,
                entry.sector.as_deref().unwrap_or("secteur inconnu"),
                stage
            );
        }
    }

    for entry in &coverage.matches {
        println!();
        render_recommendations(&entry.prospect, &entry.recommendations);
    }

    Ok(())
}

fn render_recommendations(prospect: &Prospect, recommendations: &[ScriptRecommendation]) {
    println!(
        "Recommendations for {} ({})",
        prospect.company_name,
        prospect.sector.as_deref().unwrap_or("secteur inconnu")
    );

    if recommendations.is_empty() {
        println!("  No matching outreach script in the current catalogs.");
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "  {}. {} | score {}",
            rank + 1,
            rec.template.template_name,
            rec.score
        );
        if let Some(title) = rec.formation.as_ref().and_then(|f| f.title.as_deref()) {
            println!("     Paired training: {title}");
        }
        for reason in &rec.reasons {
            println!("     - {reason}");
        }
        println!("     Subject: {}", rec.subject_preview);
        if !rec.email_body_preview.is_empty() {
            println!("     Email: {}", rec.email_body_preview);
        }
        if !rec.speech_preview.is_empty() {
            println!("     Speech: {}", rec.speech_preview);
        }
    }
}

fn sample_catalog() -> (Vec<Prospect>, Vec<Formation>, Vec<Template>) {
    let prospects = vec![
        Prospect {
            company_name: "ACME Industrie".to_string(),
            sector: Some("Industrie".to_string()),
            region: Some("Bretagne".to_string()),
            preferred_format: Some("Présentiel".to_string()),
            training_history: Some("Gestes et postures 2022".to_string()),
            stage: Some("decouverte".to_string()),
            contacts: vec![Contact {
                name: Some("Claire Martin".to_string()),
                role: Some("DRH".to_string()),
                email: Some("claire.martin@acme.example".to_string()),
                ..Contact::default()
            }],
            ..Prospect::default()
        },
        Prospect {
            company_name: "Clinique Saint-Luc".to_string(),
            sector: Some("Santé".to_string()),
            region: Some("Occitanie".to_string()),
            preferred_format: Some("Distanciel".to_string()),
            stage: Some("relance".to_string()),
            contacts: vec![Contact {
                name: Some("Marc Petit".to_string()),
                role: Some("Responsable formation".to_string()),
                ..Contact::default()
            }],
            ..Prospect::default()
        },
        Prospect {
            company_name: "Transports Morel".to_string(),
            sector: Some("Transport".to_string()),
            region: Some("Normandie".to_string()),
            stage: Some("proposition".to_string()),
            ..Prospect::default()
        },
    ];

    let formations = vec![
        Formation {
            title: Some("Prévention des TMS".to_string()),
            domain: Some("Prévention".to_string()),
            format: vec!["Présentiel".to_string()],
            duration: Some("2 jours".to_string()),
            sectors: vec!["Industrie".to_string(), "Transport".to_string()],
            audiences: vec!["Opérateurs".to_string()],
            keywords: vec!["gestes".to_string(), "postures".to_string()],
            ..Formation::default()
        },
        Formation {
            title: Some("Hygiène et sécurité en établissement de soin".to_string()),
            domain: Some("HSE".to_string()),
            format: vec!["Distanciel".to_string(), "Mixte".to_string()],
            duration: Some("1 jour".to_string()),
            sectors: vec!["Santé".to_string()],
            audiences: vec!["Soignants".to_string()],
            ..Formation::default()
        },
        Formation {
            title: Some("Sensibilisation sécurité au travail".to_string()),
            domain: Some("Sécurité".to_string()),
            format: vec!["Distanciel".to_string()],
            duration: Some("0.5 jour".to_string()),
            ..Formation::default()
        },
    ];

    let templates = vec![
        Template {
            template_name: "Découverte prévention".to_string(),
            use_case: Some("decouverte".to_string()),
            domain_filter: vec!["Prévention".to_string()],
            sector_filter: vec!["Industrie".to_string()],
            format_filter: vec!["Présentiel".to_string()],
            audience_filter: vec!["DRH".to_string()],
            email_subject: Some("Prévention des TMS chez {{company_name}}".to_string()),
            email_body: Some(
                "Bonjour {{contact_name}},\nNotre formation {{formation_title}} ({{duration}}, {{format}}) est conçue pour le secteur {{sector}}.\n{{your_name}}".to_string(),
            ),
            speech_text: Some(
                "Bonjour, je vous appelle au sujet de la formation {{formation_title}} pour {{company_name}}.".to_string(),
            ),
            ..Template::default()
        },
        Template {
            template_name: "Relance santé".to_string(),
            use_case: Some("relance".to_string()),
            domain_filter: vec!["HSE".to_string()],
            sector_filter: vec!["Santé".to_string()],
            format_filter: vec!["Distanciel".to_string()],
            email_subject: Some("Suite à notre échange - {{company_name}}".to_string()),
            email_body: Some(
                "Bonjour {{contact_name}},\nJe reviens vers vous concernant {{formation_title}} en {{format}}.".to_string(),
            ),
            ..Template::default()
        },
        Template {
            template_name: "Proposition générique".to_string(),
            use_case: Some("proposition".to_string()),
            email_body: Some(
                "Bonjour,\nVous trouverez ci-joint notre proposition de formation pour {{company_name}}.".to_string(),
            ),
            ..Template::default()
        },
    ];

    (prospects, formations, templates)
}
