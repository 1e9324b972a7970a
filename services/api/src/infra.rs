use metrics_exporter_prometheus::PrometheusHandle;
use outreach_ai::workflows::outreach::RecommendationEngine;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<RecommendationEngine>,
    pub(crate) default_top: usize,
}
