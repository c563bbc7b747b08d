use artha_mitra::advisor::AdvisorService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the shared advisory service. The scheme catalog behind it is
/// constructed once here and read-only for the process lifetime.
pub(crate) fn advisor_service() -> Arc<AdvisorService> {
    Arc::new(AdvisorService::standard())
}
