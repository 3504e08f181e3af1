//! Work Opportunity Tax Credit target groups
//!
//! Each group carries the share of a business's hires assumed to fall in the
//! group and the flat credit claimed per qualifying hire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Target groups offered on the hire-categories step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WotcCategoryId {
    Veterans,
    Snap,
    #[serde(rename = "ltu")]
    LongTermUnemployed,
    JobTraining,
    #[serde(rename = "low_income")]
    LowIncomeAreas,
    NotSure,
}

impl WotcCategoryId {
    /// Identifier used on the wire (`"veterans"`, `"ltu"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            WotcCategoryId::Veterans => "veterans",
            WotcCategoryId::Snap => "snap",
            WotcCategoryId::LongTermUnemployed => "ltu",
            WotcCategoryId::JobTraining => "job_training",
            WotcCategoryId::LowIncomeAreas => "low_income",
            WotcCategoryId::NotSure => "not_sure",
        }
    }

    /// Parse a wire identifier; unknown ids yield `None`
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "veterans" => Some(WotcCategoryId::Veterans),
            "snap" => Some(WotcCategoryId::Snap),
            "ltu" => Some(WotcCategoryId::LongTermUnemployed),
            "job_training" => Some(WotcCategoryId::JobTraining),
            "low_income" => Some(WotcCategoryId::LowIncomeAreas),
            "not_sure" => Some(WotcCategoryId::NotSure),
            _ => None,
        }
    }
}

impl std::fmt::Display for WotcCategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the WOTC table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WotcCategory {
    pub id: WotcCategoryId,
    pub label: String,
    /// Fraction of hires assumed to belong to this group
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    /// Credit per qualifying hire, in dollars
    #[serde(with = "rust_decimal::serde::float")]
    pub credit_amount: Decimal,
    pub description: String,
}

impl WotcCategory {
    fn new(
        id: WotcCategoryId,
        label: &str,
        percentage: Decimal,
        credit_amount: i64,
        description: &str,
    ) -> Self {
        Self {
            id,
            label: label.to_string(),
            percentage,
            credit_amount: Decimal::from(credit_amount),
            description: description.to_string(),
        }
    }
}

/// The table in the order the quiz lists it. Order matters: it breaks ties
/// between groups with the same percentage.
pub fn builtin_categories() -> Vec<WotcCategory> {
    vec![
        WotcCategory::new(
            WotcCategoryId::Veterans,
            "Military Veterans",
            Decimal::new(20, 2),
            5600,
            "up to $5,600 per hire",
        ),
        WotcCategory::new(
            WotcCategoryId::Snap,
            "People receiving food stamps",
            Decimal::new(30, 2),
            2400,
            "up to $2,400 per hire",
        ),
        WotcCategory::new(
            WotcCategoryId::LongTermUnemployed,
            "People unemployed for 6+ months",
            Decimal::new(30, 2),
            2400,
            "up to $2,400 per hire",
        ),
        WotcCategory::new(
            WotcCategoryId::JobTraining,
            "People from job training programs",
            Decimal::new(30, 2),
            2400,
            "up to $2,400 per hire",
        ),
        WotcCategory::new(
            WotcCategoryId::LowIncomeAreas,
            "People living in low-income areas",
            Decimal::new(30, 2),
            3000,
            "up to $3,000 per hire",
        ),
        WotcCategory::new(
            WotcCategoryId::NotSure,
            "Not sure",
            Decimal::new(20, 2),
            1200,
            "up to $1,200 per hire",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_ids_round_trip() {
        for category in builtin_categories() {
            assert_eq!(WotcCategoryId::parse(category.id.as_str()), Some(category.id));
            let json = serde_json::to_string(&category.id).unwrap();
            assert_eq!(json, format!("\"{}\"", category.id.as_str()));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(WotcCategoryId::parse(" SNAP "), Some(WotcCategoryId::Snap));
        assert_eq!(WotcCategoryId::parse("Low_Income"), Some(WotcCategoryId::LowIncomeAreas));
        assert_eq!(WotcCategoryId::parse("students"), None);
    }

    #[test]
    fn test_builtin_table_shape() {
        let table = builtin_categories();
        assert_eq!(table.len(), 6);
        assert_eq!(table[0].id, WotcCategoryId::Veterans);
        assert_eq!(table[0].credit_amount, Decimal::from(5600));
        assert_eq!(table[4].id, WotcCategoryId::LowIncomeAreas);
        assert_eq!(table[4].credit_amount, Decimal::from(3000));
    }
}
