// Work Opportunity Tax Credit estimate
use rust_decimal::Decimal;

use crate::money::qualified_count;
use crate::reference::{ReferenceData, WotcCategory};
use crate::types::QuizInput;

#[derive(Debug, Clone, PartialEq)]
pub struct WotcAssessment<'a> {
    /// Group whose rate was applied, if any
    pub category: Option<&'a WotcCategory>,
    pub qualified_hires: Decimal,
    pub credit: Decimal,
}

impl WotcAssessment<'_> {
    fn none() -> Self {
        Self {
            category: None,
            qualified_hires: Decimal::ZERO,
            credit: Decimal::ZERO,
        }
    }
}

/// Pick the selected group with the highest percentage
///
/// Rates never stack: only one group is ever applied. Ties go to the group
/// listed first in the reference table, regardless of selection order.
/// Groups with a zero percentage are never picked.
pub fn select_category<'a>(
    reference: &'a ReferenceData,
    input: &QuizInput,
) -> Option<&'a WotcCategory> {
    let mut best: Option<&WotcCategory> = None;
    for category in &reference.wotc_categories {
        if !input.categories.contains(&category.id) {
            continue;
        }
        let current = best.map_or(Decimal::ZERO, |b| b.percentage);
        if category.percentage > current {
            best = Some(category);
        }
    }
    best
}

/// `ceil(hires × pct) × credit_amount` for the winning group
pub fn assess_wotc<'a>(reference: &'a ReferenceData, input: &QuizInput) -> WotcAssessment<'a> {
    if input.hires == 0 || input.categories.is_empty() {
        return WotcAssessment::none();
    }

    let Some(category) = select_category(reference, input) else {
        return WotcAssessment::none();
    };

    let qualified_hires = qualified_count(input.hires, category.percentage);
    WotcAssessment {
        category: Some(category),
        qualified_hires,
        credit: qualified_hires * category.credit_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::WotcCategoryId;

    fn input(hires: u32, categories: &[WotcCategoryId]) -> QuizInput {
        categories
            .iter()
            .fold(QuizInput::new(hires), |acc, c| acc.with_category(*c))
    }

    #[test]
    fn test_veterans_only() {
        let reference = ReferenceData::builtin();
        let result = assess_wotc(&reference, &input(10, &[WotcCategoryId::Veterans]));
        assert_eq!(result.qualified_hires, Decimal::from(2));
        assert_eq!(result.credit, Decimal::from(11_200));
    }

    #[test]
    fn test_zero_hires_or_no_categories_is_zero() {
        let reference = ReferenceData::builtin();
        assert_eq!(
            assess_wotc(&reference, &input(0, &[WotcCategoryId::Veterans])).credit,
            Decimal::ZERO
        );
        assert_eq!(assess_wotc(&reference, &input(25, &[])).credit, Decimal::ZERO);
    }

    #[test]
    fn test_highest_percentage_wins_and_does_not_stack() {
        let reference = ReferenceData::builtin();
        // snap (30%, $2,400) beats veterans (20%, $5,600) on percentage
        let result = assess_wotc(
            &reference,
            &input(10, &[WotcCategoryId::Veterans, WotcCategoryId::Snap]),
        );
        assert_eq!(result.category.map(|c| c.id), Some(WotcCategoryId::Snap));
        assert_eq!(result.qualified_hires, Decimal::from(3));
        assert_eq!(result.credit, Decimal::from(7_200));
    }

    #[test]
    fn test_percentage_tie_goes_to_table_order() {
        let reference = ReferenceData::builtin();
        // snap, ltu, job_training and low_income all sit at 30%; snap is listed first
        let result = assess_wotc(
            &reference,
            &input(
                10,
                &[WotcCategoryId::LowIncomeAreas, WotcCategoryId::JobTraining, WotcCategoryId::Snap],
            ),
        );
        assert_eq!(result.category.map(|c| c.id), Some(WotcCategoryId::Snap));

        let result = assess_wotc(
            &reference,
            &input(10, &[WotcCategoryId::LowIncomeAreas, WotcCategoryId::NotSure]),
        );
        assert_eq!(
            result.category.map(|c| c.id),
            Some(WotcCategoryId::LowIncomeAreas)
        );
        assert_eq!(result.credit, Decimal::from(9_000));
    }

    #[test]
    fn test_category_missing_from_table_contributes_nothing() {
        let mut reference = ReferenceData::builtin().as_ref().clone();
        reference
            .wotc_categories
            .retain(|c| c.id != WotcCategoryId::Veterans);
        let result = assess_wotc(&reference, &input(10, &[WotcCategoryId::Veterans]));
        assert!(result.category.is_none());
        assert_eq!(result.credit, Decimal::ZERO);
    }
}
