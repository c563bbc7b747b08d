//! Household financial advisory: health scoring, prioritized
//! recommendations, scheme eligibility, budget allocation, goal projection,
//! and a keyword-matched chat responder.

pub mod analysis;
pub mod catalog;
pub mod chat;
pub mod domain;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{
    AdvisorEngine, AnalysisReport, BudgetBucket, BudgetPlan, Recommendation, SavingsGoal,
};
pub use catalog::{SchemeCatalog, SchemeId, SchemeRecord};
pub use domain::{DerivedMetrics, FinancialProfile, Occupation, Priority};
pub use intake::{AnalyzeRequest, ProfileError};
pub use router::{advisor_router, AnalyzeResponse, ChatRequest, ChatResponse};
pub use service::AdvisorService;
