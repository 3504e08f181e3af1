//! Tax credit estimation for the lead-generation quizzes
//!
//! [`CreditEngine`] turns sanitized quiz answers into a breakdown of four
//! independently estimated programs:
//!
//! - Work Opportunity Tax Credit (one target group's rate, never stacked)
//! - R&D credit (tiered by spend)
//! - Empowerment zone employment credit (by ZIP)
//! - State hiring credit (by state program)
//!
//! WOTC and empowerment zone credits are mutually exclusive. Each component
//! is rounded to the nearest hundred on its own; the total rounds the
//! unrounded sum, so it can differ slightly from the sum of the cards.

pub mod credits;
pub mod error;
pub mod jurisdiction;
pub mod money;
pub mod reference;
pub mod refund;
pub mod types;

use std::sync::Arc;

pub use error::ReferenceError;
pub use jurisdiction::State;
pub use reference::{ReferenceData, WotcCategoryId};
pub use refund::{estimate_refund, FilingStatus, RefundEstimate};
pub use types::{CreditBreakdown, CreditDetails, CreditResult, QuizInput};

use money::{count_to_u32, round_to_hundred};

/// CreditEngine entry point
#[derive(Debug, Clone)]
pub struct CreditEngine {
    reference: Arc<ReferenceData>,
}

impl CreditEngine {
    /// Engine over the builtin reference tables
    pub fn new() -> Self {
        Self {
            reference: ReferenceData::builtin(),
        }
    }

    pub fn with_reference(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn calculate(&self, input: &QuizInput) -> CreditResult {
        let reference = self.reference.as_ref();

        let wotc = credits::assess_wotc(reference, input);
        let rd = credits::assess_rd(reference, input);
        let empowerment = credits::assess_empowerment(reference, input);
        let state = credits::assess_state(reference, input);

        let resolved = credits::resolve_conflicts(wotc.credit, empowerment.credit);

        let unrounded_total = resolved.wotc + rd.credit + resolved.empowerment + state.credit;

        CreditResult {
            total: round_to_hundred(unrounded_total),
            breakdown: CreditBreakdown {
                wotc: round_to_hundred(resolved.wotc),
                rd: round_to_hundred(rd.credit),
                empowerment: round_to_hundred(resolved.empowerment),
                state: round_to_hundred(state.credit),
            },
            details: CreditDetails {
                wotc_qualified_hires: count_to_u32(wotc.qualified_hires, input.hires),
                rd_qualify_chance: rd.qualify_chance,
                empowerment_qualified: empowerment.in_zone,
                state_program: state.program.cloned(),
            },
        }
    }
}

impl Default for CreditEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate credits against the builtin tables
pub fn calculate_tax_credits(input: &QuizInput) -> CreditResult {
    CreditEngine::new().calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_veterans_scenario() {
        let input = QuizInput::new(10).with_category(WotcCategoryId::Veterans);
        let result = calculate_tax_credits(&input);

        assert_eq!(result.details.wotc_qualified_hires, 2);
        assert_eq!(result.breakdown.wotc, dec("11200"));
        assert_eq!(result.breakdown.rd, Decimal::ZERO);
        assert_eq!(result.breakdown.empowerment, Decimal::ZERO);
        assert_eq!(result.breakdown.state, Decimal::ZERO);
        assert_eq!(result.total, dec("11200"));
    }

    #[test]
    fn test_rd_only_scenario() {
        let input = QuizInput::new(0).with_rd_spend(dec("50000"));
        let result = calculate_tax_credits(&input);

        assert_eq!(result.details.rd_qualify_chance, dec("0.70"));
        assert_eq!(result.breakdown.rd, dec("7000"));
        assert_eq!(result.breakdown.wotc, Decimal::ZERO);
        assert_eq!(result.breakdown.empowerment, Decimal::ZERO);
        assert_eq!(result.breakdown.state, Decimal::ZERO);
        assert_eq!(result.total, dec("7000"));
    }

    #[test]
    fn test_wotc_beats_empowerment_zone() {
        let input = QuizInput::new(20)
            .with_category(WotcCategoryId::Snap)
            .with_zip("60612");
        let result = calculate_tax_credits(&input);

        assert_eq!(result.details.wotc_qualified_hires, 6);
        assert!(result.details.empowerment_qualified);
        assert_eq!(result.breakdown.wotc, dec("14400"));
        assert_eq!(result.breakdown.empowerment, Decimal::ZERO);
        assert_eq!(result.total, dec("14400"));
    }

    #[test]
    fn test_empowerment_zone_beats_small_wotc() {
        // not_sure: ceil(20 × 0.2) × 1,200 = 4,800 < zone 9,000
        let input = QuizInput::new(20)
            .with_category(WotcCategoryId::NotSure)
            .with_zip("60612");
        let result = calculate_tax_credits(&input);

        assert_eq!(result.breakdown.wotc, Decimal::ZERO);
        assert_eq!(result.breakdown.empowerment, dec("9000"));
        // Qualified hires still describe the WOTC estimate that lost
        assert_eq!(result.details.wotc_qualified_hires, 4);
    }

    #[test]
    fn test_all_programs_add_up() {
        let input = QuizInput::new(10)
            .with_category(WotcCategoryId::Veterans)
            .with_state(State::GA)
            .with_rd_spend(dec("100000"));
        let result = calculate_tax_credits(&input);

        assert_eq!(result.breakdown.wotc, dec("11200"));
        assert_eq!(result.breakdown.rd, dec("16000"));
        assert_eq!(result.breakdown.state, dec("5300"));
        assert_eq!(result.total, dec("32500"));
        assert_eq!(
            result.details.state_program.map(|p| p.name),
            Some("Georgia Job Tax Credit".to_string())
        );
    }

    #[test]
    fn test_total_rounds_unrounded_sum() {
        // rd: 6,250 × 0.2 × 0.6 = 750, card rounds to 800
        // state (GA): ceil(1 × 0.25) × 1,750 = 1,750, card rounds to 1,800
        // cards add to 2,600 while the total rounds 2,500 as-is
        let input = QuizInput::new(1)
            .with_state(State::GA)
            .with_rd_spend(dec("6250"));
        let result = calculate_tax_credits(&input);

        assert_eq!(result.breakdown.rd, dec("800"));
        assert_eq!(result.breakdown.state, dec("1800"));
        assert_eq!(result.breakdown.sum(), dec("2600"));
        assert_eq!(result.total, dec("2500"));
    }

    #[test]
    fn test_disabled_state_program_is_reported() {
        let input = QuizInput::new(10).with_state(State::TX);
        let result = calculate_tax_credits(&input);
        assert_eq!(result.breakdown.state, Decimal::ZERO);
        assert!(result.details.state_program.is_some_and(|p| !p.enabled));
    }

    #[test]
    fn test_empty_input() {
        let result = calculate_tax_credits(&QuizInput::default());
        assert_eq!(
            result,
            CreditResult {
                total: Decimal::ZERO,
                breakdown: CreditBreakdown::default(),
                details: CreditDetails::default(),
            }
        );
    }

    #[test]
    fn test_custom_reference_data() {
        let mut reference = ReferenceData::builtin().as_ref().clone();
        reference.empowerment_zone.zones.insert("99999".to_string());
        let engine = CreditEngine::with_reference(Arc::new(reference));

        let result = engine.calculate(&QuizInput::new(20).with_zip("99999"));
        assert_eq!(result.breakdown.empowerment, dec("9000"));

        // The builtin engine is unaffected
        let result = CreditEngine::new().calculate(&QuizInput::new(20).with_zip("99999"));
        assert_eq!(result.breakdown.empowerment, Decimal::ZERO);
    }
}
