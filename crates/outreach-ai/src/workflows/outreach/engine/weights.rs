/// Additive scoring constants. The defaults are empirical values tuned on
/// live catalog data; changing them is a product decision, so they live in
/// one place instead of being scattered through the clauses.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Prospect sector listed among the formation's eligible sectors.
    pub formation_sector: i32,
    /// Prospect's preferred delivery format offered by the formation.
    pub formation_format: i32,
    /// Formation domain mentioned in the prospect's training history.
    pub formation_history: i32,
    /// Formation keyword mentioned in the prospect's training history.
    pub formation_keywords: i32,
    /// Sector-agnostic formation with no other signal; keeps generalist
    /// offerings visible without stacking on real matches.
    pub formation_generalist: i32,
    /// Template use-case matching the prospect's pipeline stage.
    pub template_stage: i32,
    /// Prospect sector listed in the template's sector filter.
    pub template_sector: i32,
    /// Primary contact's role listed in the template's audience filter.
    pub template_audience: i32,
    /// Paired formation's domain listed in the template's domain filter.
    pub template_domain: i32,
    /// Prospect sector standing in for a domain in the template's filter.
    pub template_sector_as_domain: i32,
    /// Format filter satisfied by the prospect preference or the formation.
    pub template_format: i32,
    /// Fraction of the formation affinity carried into the pairing score.
    pub affinity_carry: f32,
    /// Recommendations returned when the caller does not ask for a count.
    pub default_top: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            formation_sector: 40,
            formation_format: 20,
            formation_history: 12,
            formation_keywords: 8,
            formation_generalist: 5,
            template_stage: 18,
            template_sector: 35,
            template_audience: 10,
            template_domain: 22,
            template_sector_as_domain: 15,
            template_format: 14,
            affinity_carry: 0.5,
            default_top: 3,
        }
    }
}
