use crate::advisor::analysis::{AdvisorEngine, AnalysisReport};
use crate::advisor::catalog::SchemeCatalog;
use crate::advisor::chat;
use crate::advisor::domain::FinancialProfile;
use tracing::info;

/// Facade over the rule engine and chat responder used by the HTTP router
/// and the CLI. Stateless: safe to share behind an `Arc` across workers.
pub struct AdvisorService {
    engine: AdvisorEngine,
}

impl AdvisorService {
    pub fn new(engine: AdvisorEngine) -> Self {
        Self { engine }
    }

    /// Service backed by the standard scheme catalog.
    pub fn standard() -> Self {
        Self::new(AdvisorEngine::new(SchemeCatalog::standard()))
    }

    pub fn analyze(&self, profile: &FinancialProfile) -> AnalysisReport {
        let report = self.engine.analyze(profile);
        info!(
            health_score = report.health_score,
            recommendations = report.recommendations.len(),
            schemes = report.schemes.len(),
            goals = report.goals.len(),
            "analysis complete"
        );
        report
    }

    /// One-shot chat reply. Lowercases the message so the keyword scan is
    /// case-insensitive for the English keywords.
    pub fn chat(&self, message: &str) -> &'static str {
        chat::respond(&message.to_lowercase())
    }
}

impl Default for AdvisorService {
    fn default() -> Self {
        Self::standard()
    }
}
