//! Federal income tax estimate for the "$1000 back" refund quiz
//!
//! 2024 standard deductions and ordinary-income brackets. The estimate is
//! deliberately simple: standard deduction only, no credits, no state tax.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Promotional refund figure shown on every refund result
pub const PROMISED_REFUND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    /// Married filing jointly
    Married,
    /// Head of household
    Head,
}

impl FilingStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Some(FilingStatus::Single),
            "married" | "married_joint" | "mfj" => Some(FilingStatus::Married),
            "head" | "head_of_household" | "hoh" => Some(FilingStatus::Head),
            _ => None,
        }
    }

    pub fn standard_deduction(&self) -> Decimal {
        match self {
            FilingStatus::Single => Decimal::from(14_600),
            FilingStatus::Married => Decimal::from(29_200),
            FilingStatus::Head => Decimal::from(21_900),
        }
    }

    /// Bracket ceilings with their rate in percent; the last bracket is open
    fn brackets(&self) -> &'static [(Option<i64>, i64)] {
        match self {
            FilingStatus::Single => &[
                (Some(11_600), 10),
                (Some(47_150), 12),
                (Some(100_525), 22),
                (Some(191_950), 24),
                (Some(243_725), 32),
                (Some(609_350), 35),
                (None, 37),
            ],
            FilingStatus::Married => &[
                (Some(23_200), 10),
                (Some(94_300), 12),
                (Some(201_050), 22),
                (Some(383_900), 24),
                (Some(487_450), 32),
                (Some(731_200), 35),
                (None, 37),
            ],
            FilingStatus::Head => &[
                (Some(16_550), 10),
                (Some(63_100), 12),
                (Some(100_500), 22),
                (Some(191_950), 24),
                (Some(243_700), 32),
                (Some(609_350), 35),
                (None, 37),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundEstimate {
    pub filing_status: FilingStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub standard_deduction: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub federal_tax: Decimal,
    /// Percent of gross income, two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub effective_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub after_tax_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_after_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub potential_refund: Decimal,
}

/// Progressive tax on `taxable` income
pub fn federal_tax(taxable: Decimal, status: FilingStatus) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut floor = Decimal::ZERO;

    for &(ceiling, rate) in status.brackets() {
        if taxable <= floor {
            break;
        }
        let top = ceiling.map_or(taxable, |c| taxable.min(Decimal::from(c)));
        tax += (top - floor) * Decimal::new(rate, 2);
        match ceiling {
            Some(c) => floor = Decimal::from(c),
            None => break,
        }
    }

    tax
}

/// Estimate federal tax and take-home pay; negative income counts as zero
pub fn estimate_refund(income: Decimal, status: FilingStatus) -> RefundEstimate {
    let gross_income = income.max(Decimal::ZERO);
    let standard_deduction = status.standard_deduction();
    let taxable_income = (gross_income - standard_deduction).max(Decimal::ZERO);
    let tax = federal_tax(taxable_income, status);

    let effective_rate = if gross_income.is_zero() {
        Decimal::ZERO
    } else {
        (tax / gross_income * Decimal::ONE_HUNDRED).round_dp(2)
    };
    let after_tax_income = gross_income - tax;

    RefundEstimate {
        filing_status: status,
        gross_income,
        standard_deduction,
        taxable_income,
        federal_tax: tax,
        effective_rate,
        after_tax_income,
        monthly_after_tax: (after_tax_income / Decimal::from(12)).round_dp(2),
        potential_refund: PROMISED_REFUND,
    }
}
