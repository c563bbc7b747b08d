use serde::{Deserialize, Serialize};

/// Identifiers for the government schemes the advisor can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeId {
    Pmjdy,
    Pmjjby,
    Pmsby,
    AtalPension,
    KisanCredit,
    Mudra,
}

/// Descriptive record for one welfare scheme. Pure data, no eligibility logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub id: SchemeId,
    pub name: String,
    pub description: String,
    pub eligibility: String,
    pub benefits: Vec<String>,
}

/// Read-only catalog of welfare schemes for rural households.
///
/// Built once at process start and shared by immutable reference; the
/// matcher looks records up by id and clones them into each report.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    pmjdy: SchemeRecord,
    pmjjby: SchemeRecord,
    pmsby: SchemeRecord,
    atal_pension: SchemeRecord,
    kisan_credit: SchemeRecord,
    mudra: SchemeRecord,
}

impl SchemeCatalog {
    /// The standard catalog of central-government schemes.
    pub fn standard() -> Self {
        Self {
            pmjdy: record(
                SchemeId::Pmjdy,
                "Pradhan Mantri Jan Dhan Yojana",
                "Zero balance bank account with insurance",
                "All Indian citizens",
                &["₹10,000 overdraft", "₹2 lakh accident insurance", "Zero balance"],
            ),
            pmjjby: record(
                SchemeId::Pmjjby,
                "Pradhan Mantri Jeevan Jyoti Bima Yojana",
                "Life insurance scheme",
                "18-50 years with bank account",
                &["₹2 lakh life cover", "₹330/year premium"],
            ),
            pmsby: record(
                SchemeId::Pmsby,
                "Pradhan Mantri Suraksha Bima Yojana",
                "Accident insurance scheme",
                "18-70 years with bank account",
                &["₹2 lakh accident cover", "₹12/year premium"],
            ),
            atal_pension: record(
                SchemeId::AtalPension,
                "Atal Pension Yojana",
                "Pension scheme for unorganized sector",
                "18-40 years",
                &["₹1,000-5,000 monthly pension", "Government co-contribution"],
            ),
            kisan_credit: record(
                SchemeId::KisanCredit,
                "Kisan Credit Card",
                "Credit facility for farmers",
                "Farmers with land",
                &["Low interest loans", "Flexible repayment", "Insurance coverage"],
            ),
            mudra: record(
                SchemeId::Mudra,
                "MUDRA Loan",
                "Micro-enterprise loans",
                "Small businesses",
                &["Up to ₹10 lakh loan", "No collateral", "Low interest"],
            ),
        }
    }

    /// Total lookup; every id has a record.
    pub fn record(&self, id: SchemeId) -> &SchemeRecord {
        match id {
            SchemeId::Pmjdy => &self.pmjdy,
            SchemeId::Pmjjby => &self.pmjjby,
            SchemeId::Pmsby => &self.pmsby,
            SchemeId::AtalPension => &self.atal_pension,
            SchemeId::KisanCredit => &self.kisan_credit,
            SchemeId::Mudra => &self.mudra,
        }
    }
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn record(
    id: SchemeId,
    name: &str,
    description: &str,
    eligibility: &str,
    benefits: &[&str],
) -> SchemeRecord {
    SchemeRecord {
        id,
        name: name.to_string(),
        description: description.to_string(),
        eligibility: eligibility.to_string(),
        benefits: benefits.iter().map(|benefit| benefit.to_string()).collect(),
    }
}
