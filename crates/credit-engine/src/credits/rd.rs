// R&D credit estimate
use rust_decimal::Decimal;

use crate::reference::rd::{RdTier, BASE_CREDIT_RATE};
use crate::reference::ReferenceData;
use crate::types::QuizInput;

#[derive(Debug, Clone, PartialEq)]
pub struct RdAssessment<'a> {
    pub tier: Option<&'a RdTier>,
    /// Zero when spend is below the first tier
    pub qualify_chance: Decimal,
    pub credit: Decimal,
}

/// `spend × 20% × qualify_chance` of the tier containing the spend
///
/// The tier's average credit plays no part in the amount.
pub fn assess_rd<'a>(reference: &'a ReferenceData, input: &QuizInput) -> RdAssessment<'a> {
    match reference.rd_tier_for(input.rd_spend) {
        Some(tier) => RdAssessment {
            tier: Some(tier),
            qualify_chance: tier.qualify_chance,
            credit: input.rd_spend * BASE_CREDIT_RATE * tier.qualify_chance,
        },
        None => RdAssessment {
            tier: None,
            qualify_chance: Decimal::ZERO,
            credit: Decimal::ZERO,
        },
    }
}
