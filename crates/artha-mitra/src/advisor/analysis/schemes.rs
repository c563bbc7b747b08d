use crate::advisor::catalog::{SchemeCatalog, SchemeId, SchemeRecord};
use crate::advisor::domain::{FinancialProfile, Occupation};

/// Hard cap on how many schemes a single report surfaces.
const MAX_SCHEMES: usize = 4;

/// Income ceiling for MUDRA micro-enterprise loans.
const MUDRA_INCOME_CEILING: f64 = 100_000.0;

/// Select eligible schemes in a fixed evaluation order, truncated to the
/// first four matches. Truncation keeps the guard order; matches are never
/// re-ranked by relevance.
pub(crate) fn eligible_schemes(
    profile: &FinancialProfile,
    catalog: &SchemeCatalog,
) -> Vec<SchemeRecord> {
    let mut ids = Vec::new();

    if !profile.has_bank_account {
        ids.push(SchemeId::Pmjdy);
    }
    if profile.has_bank_account && (18..=50).contains(&profile.age) {
        ids.push(SchemeId::Pmjjby);
    }
    if profile.has_bank_account && (18..=70).contains(&profile.age) {
        ids.push(SchemeId::Pmsby);
    }
    if (18..=40).contains(&profile.age) {
        ids.push(SchemeId::AtalPension);
    }
    if profile.occupation == Occupation::Farmer {
        ids.push(SchemeId::KisanCredit);
    }
    if matches!(
        profile.occupation,
        Occupation::Business | Occupation::SelfEmployed
    ) && profile.monthly_income < MUDRA_INCOME_CEILING
    {
        ids.push(SchemeId::Mudra);
    }

    ids.truncate(MAX_SCHEMES);
    ids.into_iter()
        .map(|id| catalog.record(id).clone())
        .collect()
}
