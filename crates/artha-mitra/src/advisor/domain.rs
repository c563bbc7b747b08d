use serde::{Deserialize, Serialize};

/// Validated household snapshot used for a single analysis request.
///
/// Profiles are immutable and never persisted; every downstream computation
/// is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub savings: f64,
    pub debt: f64,
    pub family_size: u32,
    pub occupation: Occupation,
    pub has_bank_account: bool,
    pub age: u8,
}

/// Occupation categories recognized by the eligibility rules.
///
/// Anything the wire format does not recognize collapses to `Other`, matching
/// how unknown occupations simply fail every occupation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupation {
    Farmer,
    Business,
    SelfEmployed,
    DailyWage,
    Other,
}

impl Serialize for Occupation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Occupation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Occupation::parse(&raw))
    }
}

impl Occupation {
    pub const fn label(self) -> &'static str {
        match self {
            Occupation::Farmer => "farmer",
            Occupation::Business => "business",
            Occupation::SelfEmployed => "self_employed",
            Occupation::DailyWage => "daily_wage",
            Occupation::Other => "other",
        }
    }

    /// Lenient parser for CLI input; unrecognized labels fall back to `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "farmer" => Occupation::Farmer,
            "business" => Occupation::Business,
            "self_employed" | "self-employed" => Occupation::SelfEmployed,
            "daily_wage" | "daily-wage" => Occupation::DailyWage,
            _ => Occupation::Other,
        }
    }
}

/// Ratios derived once per request and shared by every advisory component.
///
/// All four values are total functions of the profile: a non-positive income
/// zeroes the income-denominated ratios instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub monthly_surplus: f64,
    pub savings_rate: f64,
    pub debt_to_income: f64,
    pub emergency_months: f64,
}

impl DerivedMetrics {
    pub fn from_profile(profile: &FinancialProfile) -> Self {
        let monthly_surplus = profile.monthly_income - profile.monthly_expenses;

        let (savings_rate, debt_to_income, emergency_months) = if profile.monthly_income > 0.0 {
            (
                monthly_surplus / profile.monthly_income * 100.0,
                profile.debt / (profile.monthly_income * 12.0) * 100.0,
                profile.savings / profile.monthly_income,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        Self {
            monthly_surplus,
            savings_rate,
            debt_to_income,
            emergency_months,
        }
    }

    /// Display copy with the surplus at paisa precision and ratios at one
    /// decimal, matching the advisory report wire format.
    pub fn rounded(&self) -> Self {
        Self {
            monthly_surplus: round_to(self.monthly_surplus, 2),
            savings_rate: round_to(self.savings_rate, 1),
            debt_to_income: round_to(self.debt_to_income, 1),
            emergency_months: round_to(self.emergency_months, 1),
        }
    }
}

/// Urgency bucket attached to recommendations and savings goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
