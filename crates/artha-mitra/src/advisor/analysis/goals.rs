use crate::advisor::domain::Priority;
use serde::{Deserialize, Serialize};

/// A savings goal with its projected time to target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub target: f64,
    pub monthly_save: f64,
    pub months: u32,
    pub priority: Priority,
}

const MAX_GOALS: usize = 3;

/// Retirement goal is only offered below this age.
const RETIREMENT_AGE_CUTOFF: u8 = 50;

const EMERGENCY_FUND_MONTHS: f64 = 6.0;
const CHILD_EDUCATION_TARGET: f64 = 200_000.0;
const RETIREMENT_TARGET: f64 = 500_000.0;

/// Project up to three prioritized savings goals from the monthly surplus.
///
/// With no surplus there is nothing to allocate, so the goal list is empty
/// rather than an error; this guard also keeps the months divisor non-zero.
pub(crate) fn project(monthly_income: f64, monthly_surplus: f64, age: u8) -> Vec<SavingsGoal> {
    if monthly_surplus <= 0.0 {
        return Vec::new();
    }

    let mut goals = vec![
        goal(
            "आपातकालीन फंड (Emergency Fund)",
            monthly_income * EMERGENCY_FUND_MONTHS,
            0.4,
            0.10,
            Priority::High,
            monthly_income,
            monthly_surplus,
        ),
        goal(
            "बच्चों की शिक्षा (Child Education)",
            CHILD_EDUCATION_TARGET,
            0.3,
            0.05,
            Priority::Medium,
            monthly_income,
            monthly_surplus,
        ),
    ];

    if age < RETIREMENT_AGE_CUTOFF {
        goals.push(goal(
            "रिटायरमेंट (Retirement)",
            RETIREMENT_TARGET,
            0.3,
            0.05,
            Priority::Low,
            monthly_income,
            monthly_surplus,
        ));
    }

    goals.truncate(MAX_GOALS);
    goals
}

fn goal(
    name: &str,
    target: f64,
    surplus_fraction: f64,
    income_cap: f64,
    priority: Priority,
    monthly_income: f64,
    monthly_surplus: f64,
) -> SavingsGoal {
    let uncapped_save = monthly_surplus * surplus_fraction;
    SavingsGoal {
        name: name.to_string(),
        target,
        monthly_save: uncapped_save.min(monthly_income * income_cap),
        // The projection divides by the uncapped surplus share even when the
        // income cap limits monthly_save, so months can undershoot the time
        // the capped contribution would actually take.
        months: (target / uncapped_save) as u32,
        priority,
    }
}
