use crate::advisor::domain::{FinancialProfile, Occupation};
use serde::{Deserialize, Serialize};

/// Validation errors raised while turning a raw request into a profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("{field} must be a non-negative amount, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },
    #[error("family_size must be at least 1")]
    EmptyHousehold,
    #[error("age {0} is outside the supported 0-120 range")]
    ImplausibleAge(u8),
}

const MAX_AGE: u8 = 120;

/// Raw analysis request as it arrives over the wire or from CLI flags.
///
/// Field defaults mirror the public API contract: omitted amounts are zero,
/// an omitted household is a single 25-year-old with no bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_expenses: f64,
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub debt: f64,
    #[serde(default = "default_family_size")]
    pub family_size: u32,
    #[serde(default = "default_occupation")]
    pub occupation: Occupation,
    #[serde(default)]
    pub has_bank_account: bool,
    #[serde(default = "default_age")]
    pub age: u8,
}

fn default_family_size() -> u32 {
    1
}

fn default_occupation() -> Occupation {
    Occupation::Other
}

fn default_age() -> u8 {
    25
}

impl Default for AnalyzeRequest {
    fn default() -> Self {
        Self {
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            savings: 0.0,
            debt: 0.0,
            family_size: default_family_size(),
            occupation: default_occupation(),
            has_bank_account: false,
            age: default_age(),
        }
    }
}

impl AnalyzeRequest {
    /// Validate the request into a profile the engine can trust: money
    /// amounts finite and non-negative, household non-empty, age plausible.
    pub fn into_profile(self) -> Result<FinancialProfile, ProfileError> {
        for (field, value) in [
            ("monthly_income", self.monthly_income),
            ("monthly_expenses", self.monthly_expenses),
            ("savings", self.savings),
            ("debt", self.debt),
        ] {
            if !value.is_finite() {
                return Err(ProfileError::NonFiniteAmount { field });
            }
            if value < 0.0 {
                return Err(ProfileError::NegativeAmount { field, value });
            }
        }

        if self.family_size == 0 {
            return Err(ProfileError::EmptyHousehold);
        }
        if self.age > MAX_AGE {
            return Err(ProfileError::ImplausibleAge(self.age));
        }

        Ok(FinancialProfile {
            monthly_income: self.monthly_income,
            monthly_expenses: self.monthly_expenses,
            savings: self.savings,
            debt: self.debt,
            family_size: self.family_size,
            occupation: self.occupation,
            has_bank_account: self.has_bank_account,
            age: self.age,
        })
    }
}
