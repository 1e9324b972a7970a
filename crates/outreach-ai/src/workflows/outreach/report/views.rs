use serde::Serialize;

/// Number of prospects whose leading recommendation carries a use-case tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCaseCount {
    pub use_case: String,
    pub prospects: usize,
}

/// A covered prospect together with its leading recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct TopOpportunity {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub template_name: String,
    pub score: i32,
    pub subject_preview: String,
}

/// A prospect the current catalogs cannot produce any script for.
#[derive(Debug, Clone, Serialize)]
pub struct UncoveredProspect {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

/// Dashboard-ready aggregation over one engine run per prospect.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageSummary {
    pub prospects_total: usize,
    pub prospects_covered: usize,
    pub coverage_pct: u8,
    pub use_case_distribution: Vec<UseCaseCount>,
    pub top_opportunities: Vec<TopOpportunity>,
    pub uncovered_prospects: Vec<UncoveredProspect>,
}
