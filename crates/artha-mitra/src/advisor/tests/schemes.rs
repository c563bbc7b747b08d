use super::common::*;
use crate::advisor::catalog::SchemeId;
use crate::advisor::domain::Occupation;

fn scheme_ids(profile: &crate::advisor::domain::FinancialProfile) -> Vec<SchemeId> {
    engine()
        .analyze(profile)
        .schemes
        .iter()
        .map(|scheme| scheme.id)
        .collect()
}

#[test]
fn zero_balance_account_iff_unbanked() {
    let mut profile = baseline_profile();
    profile.has_bank_account = false;
    assert!(scheme_ids(&profile).contains(&SchemeId::Pmjdy));

    profile.has_bank_account = true;
    assert!(!scheme_ids(&profile).contains(&SchemeId::Pmjdy));
}

#[test]
fn banked_farmer_in_pension_band_hits_the_cap() {
    let mut profile = baseline_profile();
    profile.occupation = Occupation::Farmer;
    let ids = scheme_ids(&profile);
    assert_eq!(
        ids,
        vec![
            SchemeId::Pmjjby,
            SchemeId::Pmsby,
            SchemeId::AtalPension,
            SchemeId::KisanCredit,
        ]
    );
}

#[test]
fn never_more_than_four_schemes() {
    let mut profile = baseline_profile();
    for occupation in [
        Occupation::Farmer,
        Occupation::Business,
        Occupation::SelfEmployed,
        Occupation::Other,
    ] {
        for has_bank_account in [false, true] {
            for age in [10, 18, 40, 50, 70, 80] {
                profile.occupation = occupation;
                profile.has_bank_account = has_bank_account;
                profile.age = age;
                assert!(scheme_ids(&profile).len() <= 4);
            }
        }
    }
}

#[test]
fn insurance_age_bands() {
    let mut profile = baseline_profile();

    profile.age = 50;
    let ids = scheme_ids(&profile);
    assert!(ids.contains(&SchemeId::Pmjjby));
    assert!(ids.contains(&SchemeId::Pmsby));

    profile.age = 51;
    let ids = scheme_ids(&profile);
    assert!(!ids.contains(&SchemeId::Pmjjby));
    assert!(ids.contains(&SchemeId::Pmsby));

    profile.age = 71;
    let ids = scheme_ids(&profile);
    assert!(!ids.contains(&SchemeId::Pmsby));
}

#[test]
fn pension_scheme_age_band_applies_regardless_of_account() {
    let mut profile = baseline_profile();
    profile.has_bank_account = false;
    profile.age = 40;
    assert!(scheme_ids(&profile).contains(&SchemeId::AtalPension));

    profile.age = 41;
    assert!(!scheme_ids(&profile).contains(&SchemeId::AtalPension));
}

#[test]
fn micro_loan_income_ceiling_is_exclusive() {
    let mut profile = baseline_profile();
    profile.occupation = Occupation::Business;
    assert!(scheme_ids(&profile).contains(&SchemeId::Mudra));

    profile.occupation = Occupation::SelfEmployed;
    assert!(scheme_ids(&profile).contains(&SchemeId::Mudra));

    profile.monthly_income = 100_000.0;
    assert!(!scheme_ids(&profile).contains(&SchemeId::Mudra));

    profile.monthly_income = 20000.0;
    profile.occupation = Occupation::DailyWage;
    assert!(!scheme_ids(&profile).contains(&SchemeId::Mudra));
}
