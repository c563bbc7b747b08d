//! The advisory rule engine: derives household metrics once, then composes
//! the scorer, recommendation rules, scheme matcher, budget allocator, and
//! goal projector into a single report.

mod budget;
mod goals;
mod recommend;
mod schemes;
mod score;

pub use budget::{BudgetBucket, BudgetPlan};
pub use goals::SavingsGoal;
pub use recommend::Recommendation;

use crate::advisor::catalog::{SchemeCatalog, SchemeRecord};
use crate::advisor::domain::{DerivedMetrics, FinancialProfile};
use serde::{Deserialize, Serialize};

/// Stateless engine evaluating one profile against the scheme catalog.
pub struct AdvisorEngine {
    catalog: SchemeCatalog,
}

impl AdvisorEngine {
    pub fn new(catalog: SchemeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    pub fn analyze(&self, profile: &FinancialProfile) -> AnalysisReport {
        let metrics = DerivedMetrics::from_profile(profile);

        AnalysisReport {
            health_score: score::health_score(&metrics),
            metrics: metrics.rounded(),
            recommendations: recommend::recommendations(profile, &metrics),
            schemes: schemes::eligible_schemes(profile, &self.catalog),
            budget: budget::allocate(profile.monthly_income),
            goals: goals::project(profile.monthly_income, metrics.monthly_surplus, profile.age),
        }
    }
}

impl Default for AdvisorEngine {
    fn default() -> Self {
        Self::new(SchemeCatalog::standard())
    }
}

/// Full advisory output for one request.
///
/// Recommendations keep rule-evaluation order and are uncapped; schemes are
/// capped at four and goals at three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub health_score: u8,
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
    pub recommendations: Vec<Recommendation>,
    pub schemes: Vec<SchemeRecord>,
    pub budget: BudgetPlan,
    pub goals: Vec<SavingsGoal>,
}
