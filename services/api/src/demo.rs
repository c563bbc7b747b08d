use crate::infra::advisor_service;
use artha_mitra::advisor::{AnalyzeRequest, Occupation};
use artha_mitra::error::AppError;
use chrono::Local;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Monthly household income in rupees
    #[arg(long, default_value_t = 0.0)]
    pub(crate) income: f64,
    /// Monthly household expenses in rupees
    #[arg(long, default_value_t = 0.0)]
    pub(crate) expenses: f64,
    /// Accumulated savings in rupees
    #[arg(long, default_value_t = 0.0)]
    pub(crate) savings: f64,
    /// Outstanding debt in rupees
    #[arg(long, default_value_t = 0.0)]
    pub(crate) debt: f64,
    /// Number of household members
    #[arg(long, default_value_t = 1)]
    pub(crate) family_size: u32,
    /// Occupation (farmer, business, self_employed, daily_wage, other)
    #[arg(long, default_value = "other")]
    pub(crate) occupation: String,
    /// Whether the household has a bank account
    #[arg(long)]
    pub(crate) has_bank_account: bool,
    /// Age of the primary earner
    #[arg(long, default_value_t = 25)]
    pub(crate) age: u8,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// Question for the advisory chat
    #[arg(long)]
    pub(crate) message: String,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let request = AnalyzeRequest {
        monthly_income: args.income,
        monthly_expenses: args.expenses,
        savings: args.savings,
        debt: args.debt,
        family_size: args.family_size,
        occupation: Occupation::parse(&args.occupation),
        has_bank_account: args.has_bank_account,
        age: args.age,
    };

    let profile = request.into_profile()?;
    let report = advisor_service().analyze(&profile);

    println!("Advisory report — {}", Local::now().format("%Y-%m-%d %H:%M"));
    println!("================================================");
    println!("Health score:     {}/100", report.health_score);
    println!("Monthly surplus:  ₹{:.2}", report.metrics.monthly_surplus);
    println!("Savings rate:     {:.1}%", report.metrics.savings_rate);
    println!("Debt to income:   {:.1}%", report.metrics.debt_to_income);
    println!("Emergency months: {:.1}", report.metrics.emergency_months);

    if !report.recommendations.is_empty() {
        println!("\nRecommendations");
        for rec in &report.recommendations {
            println!("  [{:?}] {}", rec.priority, rec.title);
            println!("         {}", rec.description);
            println!("         -> {}", rec.action);
        }
    }

    if !report.schemes.is_empty() {
        println!("\nEligible schemes");
        for scheme in &report.schemes {
            println!("  {} — {}", scheme.name, scheme.description);
            println!("    Eligibility: {}", scheme.eligibility);
        }
    }

    println!("\nBudget plan");
    for (label, bucket) in [
        ("Needs", &report.budget.needs),
        ("Wants", &report.budget.wants),
        ("Savings", &report.budget.savings),
    ] {
        println!(
            "  {:<8} ₹{:>10.2} ({}%)",
            label, bucket.amount, bucket.percentage
        );
    }

    if !report.goals.is_empty() {
        println!("\nSavings goals");
        for goal in &report.goals {
            println!(
                "  {} — target ₹{:.0}, save ₹{:.0}/month, ~{} months",
                goal.name, goal.target, goal.monthly_save, goal.months
            );
        }
    }

    Ok(())
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let reply = advisor_service().chat(&args.message);
    println!("{reply}");
    Ok(())
}
