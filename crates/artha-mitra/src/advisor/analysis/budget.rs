use crate::advisor::domain::round_to;
use serde::{Deserialize, Serialize};

/// Fixed-ratio monthly budget, a 50-30-20 rule adapted for rural households.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub needs: BudgetBucket,
    pub wants: BudgetBucket,
    pub savings: BudgetBucket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBucket {
    pub amount: f64,
    pub percentage: u8,
    pub categories: Vec<String>,
}

const NEEDS_PERCENT: u8 = 60;
const WANTS_PERCENT: u8 = 20;
const SAVINGS_PERCENT: u8 = 20;

const NEEDS_CATEGORIES: &[&str] = &[
    "भोजन (Food)",
    "आवास (Housing)",
    "शिक्षा (Education)",
    "स्वास्थ्य (Health)",
];
const WANTS_CATEGORIES: &[&str] = &["मनोरंजन (Entertainment)", "यात्रा (Travel)", "अन्य (Others)"];
const SAVINGS_CATEGORIES: &[&str] = &["बचत खाता (Savings)", "निवेश (Investment)", "बीमा (Insurance)"];

/// Split income into the three fixed buckets. No conditional logic: zero or
/// negative income simply scales every amount the same way.
pub(crate) fn allocate(monthly_income: f64) -> BudgetPlan {
    BudgetPlan {
        needs: bucket(monthly_income, NEEDS_PERCENT, NEEDS_CATEGORIES),
        wants: bucket(monthly_income, WANTS_PERCENT, WANTS_CATEGORIES),
        savings: bucket(monthly_income, SAVINGS_PERCENT, SAVINGS_CATEGORIES),
    }
}

fn bucket(monthly_income: f64, percentage: u8, categories: &[&str]) -> BudgetBucket {
    BudgetBucket {
        amount: round_to(monthly_income * f64::from(percentage) / 100.0, 2),
        percentage,
        categories: categories.iter().map(|label| label.to_string()).collect(),
    }
}
