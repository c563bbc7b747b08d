use crate::advisor::domain::DerivedMetrics;

const BASE_SCORE: u8 = 50;
const MAX_SCORE: u8 = 100;

/// Composite financial health score in `[0, 100]`.
///
/// Three independent bonus tiers on top of the base score, each worth up to
/// 25 points. Within a category only the highest matching tier applies.
pub(crate) fn health_score(metrics: &DerivedMetrics) -> u8 {
    let mut score = BASE_SCORE;

    // Savings-rate tier.
    if metrics.savings_rate >= 20.0 {
        score += 25;
    } else if metrics.savings_rate >= 10.0 {
        score += 15;
    } else if metrics.savings_rate >= 5.0 {
        score += 10;
    }

    // Debt-burden tier; debt_to_income is already income-guarded upstream.
    if metrics.debt_to_income == 0.0 {
        score += 25;
    } else if metrics.debt_to_income < 20.0 {
        score += 20;
    } else if metrics.debt_to_income < 40.0 {
        score += 10;
    }

    // Emergency-fund tier, measured in months of income.
    if metrics.emergency_months >= 6.0 {
        score += 25;
    } else if metrics.emergency_months >= 3.0 {
        score += 15;
    } else if metrics.emergency_months >= 1.0 {
        score += 10;
    }

    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(savings_rate: f64, debt_to_income: f64, emergency_months: f64) -> DerivedMetrics {
        DerivedMetrics {
            monthly_surplus: 0.0,
            savings_rate,
            debt_to_income,
            emergency_months,
        }
    }

    #[test]
    fn base_score_when_no_tier_matches() {
        assert_eq!(health_score(&metrics(0.0, 50.0, 0.0)), 50);
    }

    #[test]
    fn perfect_tiers_clamp_to_one_hundred() {
        // 50 + 25 + 25 + 25 would overshoot; the clamp holds it at 100.
        assert_eq!(health_score(&metrics(25.0, 0.0, 6.0)), 100);
    }

    #[test]
    fn only_the_highest_tier_in_a_category_applies() {
        // 20% savings rate awards 25, not 25 + 15 + 10.
        assert_eq!(health_score(&metrics(20.0, 50.0, 0.0)), 75);
    }

    #[test]
    fn tier_boundaries_are_inclusive_for_savings_and_exclusive_for_debt() {
        assert_eq!(health_score(&metrics(10.0, 50.0, 0.0)), 65);
        assert_eq!(health_score(&metrics(5.0, 50.0, 0.0)), 60);
        // Exactly 20% debt burden falls through to the <40 tier.
        assert_eq!(health_score(&metrics(0.0, 20.0, 0.0)), 60);
        assert_eq!(health_score(&metrics(0.0, 19.9, 0.0)), 70);
    }

    #[test]
    fn emergency_fund_tiers() {
        assert_eq!(health_score(&metrics(0.0, 50.0, 1.0)), 60);
        assert_eq!(health_score(&metrics(0.0, 50.0, 3.0)), 65);
        assert_eq!(health_score(&metrics(0.0, 50.0, 6.5)), 75);
    }

    #[test]
    fn zero_income_example_scores_at_base() {
        // DerivedMetrics zeroes every ratio when income is zero, and a zero
        // debt ratio still earns the debt-free bonus.
        assert_eq!(health_score(&metrics(0.0, 0.0, 0.0)), 75);
    }
}
