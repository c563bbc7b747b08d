use crate::advisor::domain::{DerivedMetrics, FinancialProfile, Occupation, Priority};
use serde::{Deserialize, Serialize};

/// One advisory item, with bilingual copy and a concrete next step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
}

/// A rule either fires with a fully rendered recommendation or stays silent.
type Rule = fn(&FinancialProfile, &DerivedMetrics) -> Option<Recommendation>;

/// Ordered rule table. Rules are independent (several can fire) and the
/// output keeps this evaluation order rather than sorting by priority.
const RULES: &[Rule] = &[
    open_bank_account,
    reduce_expenses,
    build_emergency_fund,
    pay_off_debt,
    increase_savings,
    kisan_credit_card,
    pension_enrollment,
];

pub(crate) fn recommendations(
    profile: &FinancialProfile,
    metrics: &DerivedMetrics,
) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter_map(|rule| rule(profile, metrics))
        .collect()
}

fn open_bank_account(profile: &FinancialProfile, _: &DerivedMetrics) -> Option<Recommendation> {
    if profile.has_bank_account {
        return None;
    }
    Some(Recommendation {
        priority: Priority::High,
        title: "खाता खोलें (Open Bank Account)".to_string(),
        description: "Jan Dhan Yojana के तहत मुफ्त बैंक खाता खोलें".to_string(),
        action: "Visit nearest bank with Aadhaar card".to_string(),
    })
}

fn reduce_expenses(_: &FinancialProfile, metrics: &DerivedMetrics) -> Option<Recommendation> {
    if metrics.monthly_surplus >= 0.0 {
        return None;
    }
    Some(Recommendation {
        priority: Priority::High,
        title: "खर्च कम करें (Reduce Expenses)".to_string(),
        description: format!(
            "आप महीने में ₹{:.0} अधिक खर्च कर रहे हैं",
            metrics.monthly_surplus.abs()
        ),
        action: "Track daily expenses and cut unnecessary costs".to_string(),
    })
}

fn build_emergency_fund(
    profile: &FinancialProfile,
    _: &DerivedMetrics,
) -> Option<Recommendation> {
    let buffer_target = profile.monthly_income * 3.0;
    if profile.savings >= buffer_target {
        return None;
    }
    Some(Recommendation {
        priority: Priority::High,
        title: "आपातकालीन फंड बनाएं (Build Emergency Fund)".to_string(),
        description: "3-6 महीने के खर्च के बराबर बचत रखें".to_string(),
        action: format!(
            "Save ₹{:.0} for emergency fund",
            buffer_target - profile.savings
        ),
    })
}

fn pay_off_debt(profile: &FinancialProfile, _: &DerivedMetrics) -> Option<Recommendation> {
    if profile.debt <= 0.0 {
        return None;
    }
    Some(Recommendation {
        priority: Priority::Medium,
        title: "कर्ज चुकाएं (Pay Off Debt)".to_string(),
        description: format!("कुल कर्ज: ₹{:.0}", profile.debt),
        action: "Prioritize high-interest debt first".to_string(),
    })
}

fn increase_savings(profile: &FinancialProfile, metrics: &DerivedMetrics) -> Option<Recommendation> {
    if metrics.savings_rate >= 10.0 || metrics.monthly_surplus <= 0.0 {
        return None;
    }
    Some(Recommendation {
        priority: Priority::Medium,
        title: "बचत बढ़ाएं (Increase Savings)".to_string(),
        description: "आय का कम से कम 10-20% बचत करें".to_string(),
        action: format!(
            "Try to save ₹{:.0} per month",
            profile.monthly_income * 0.1
        ),
    })
}

fn kisan_credit_card(profile: &FinancialProfile, _: &DerivedMetrics) -> Option<Recommendation> {
    if profile.occupation != Occupation::Farmer || profile.monthly_income <= 0.0 {
        return None;
    }
    Some(Recommendation {
        priority: Priority::Medium,
        title: "किसान क्रेडिट कार्ड (Kisan Credit Card)".to_string(),
        description: "कम ब्याज पर कृषि ऋण प्राप्त करें".to_string(),
        action: "Apply at nearest bank or CSC".to_string(),
    })
}

fn pension_enrollment(profile: &FinancialProfile, _: &DerivedMetrics) -> Option<Recommendation> {
    if !(18..=40).contains(&profile.age) || !profile.has_bank_account {
        return None;
    }
    Some(Recommendation {
        priority: Priority::Low,
        title: "पेंशन योजना (Pension Scheme)".to_string(),
        description: "Atal Pension Yojana में निवेश करें".to_string(),
        action: "Start with ₹210/month contribution".to_string(),
    })
}
