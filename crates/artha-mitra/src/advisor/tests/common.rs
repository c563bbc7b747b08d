use axum::response::Response;
use serde_json::Value;

use crate::advisor::analysis::AdvisorEngine;
use crate::advisor::catalog::SchemeCatalog;
use crate::advisor::domain::{FinancialProfile, Occupation};

/// A comfortable baseline household: steady surplus, no debt, banked.
pub(super) fn baseline_profile() -> FinancialProfile {
    FinancialProfile {
        monthly_income: 20000.0,
        monthly_expenses: 15000.0,
        savings: 10000.0,
        debt: 0.0,
        family_size: 4,
        occupation: Occupation::Other,
        has_bank_account: true,
        age: 30,
    }
}

pub(super) fn engine() -> AdvisorEngine {
    AdvisorEngine::new(SchemeCatalog::standard())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
