use crate::advisor::domain::Occupation;
use crate::advisor::intake::{AnalyzeRequest, ProfileError};

#[test]
fn empty_body_fills_defaults() {
    let request: AnalyzeRequest = serde_json::from_str("{}").expect("defaults apply");
    assert_eq!(request.monthly_income, 0.0);
    assert_eq!(request.family_size, 1);
    assert_eq!(request.occupation, Occupation::Other);
    assert!(!request.has_bank_account);
    assert_eq!(request.age, 25);

    let profile = request.into_profile().expect("defaults validate");
    assert_eq!(profile.age, 25);
}

#[test]
fn negative_amounts_are_rejected_with_the_field_name() {
    let request = AnalyzeRequest {
        debt: -5.0,
        ..AnalyzeRequest::default()
    };
    match request.into_profile() {
        Err(ProfileError::NegativeAmount { field, value }) => {
            assert_eq!(field, "debt");
            assert_eq!(value, -5.0);
        }
        other => panic!("expected negative amount error, got {other:?}"),
    }
}

#[test]
fn non_finite_amounts_are_rejected() {
    let request = AnalyzeRequest {
        savings: f64::NAN,
        ..AnalyzeRequest::default()
    };
    assert!(matches!(
        request.into_profile(),
        Err(ProfileError::NonFiniteAmount { field: "savings" })
    ));
}

#[test]
fn zero_family_size_is_rejected() {
    let request = AnalyzeRequest {
        family_size: 0,
        ..AnalyzeRequest::default()
    };
    assert!(matches!(
        request.into_profile(),
        Err(ProfileError::EmptyHousehold)
    ));
}

#[test]
fn implausible_age_is_rejected() {
    let request = AnalyzeRequest {
        age: 121,
        ..AnalyzeRequest::default()
    };
    assert!(matches!(
        request.into_profile(),
        Err(ProfileError::ImplausibleAge(121))
    ));

    let request = AnalyzeRequest {
        age: 120,
        ..AnalyzeRequest::default()
    };
    assert!(request.into_profile().is_ok());
}

#[test]
fn wire_occupation_strings_map_to_variants() {
    let request: AnalyzeRequest =
        serde_json::from_str(r#"{"occupation": "self_employed"}"#).expect("parses");
    assert_eq!(request.occupation, Occupation::SelfEmployed);

    let request: AnalyzeRequest =
        serde_json::from_str(r#"{"occupation": "shopkeeper"}"#).expect("parses");
    assert_eq!(request.occupation, Occupation::Other);
}
