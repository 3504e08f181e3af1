// State hiring credit estimate
use rust_decimal::Decimal;

use crate::money::qualified_count;
use crate::reference::{ReferenceData, StateProgram};
use crate::types::QuizInput;

#[derive(Debug, Clone, PartialEq)]
pub struct StateAssessment<'a> {
    /// Program on file for the state, enabled or not
    pub program: Option<&'a StateProgram>,
    pub qualified_hires: Decimal,
    pub credit: Decimal,
}

/// `ceil(hires × pct) × credit_per_hire` for an enabled program
pub fn assess_state<'a>(reference: &'a ReferenceData, input: &QuizInput) -> StateAssessment<'a> {
    let program = input.state.and_then(|state| reference.state_program(state));

    match program {
        Some(p) if p.enabled => {
            let qualified_hires = qualified_count(input.hires, p.percentage);
            StateAssessment {
                program,
                qualified_hires,
                credit: qualified_hires * p.credit_per_hire,
            }
        }
        _ => StateAssessment {
            program,
            qualified_hires: Decimal::ZERO,
            credit: Decimal::ZERO,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::State;

    #[test]
    fn test_enabled_program() {
        let reference = ReferenceData::builtin();
        // Georgia: 25% of hires at $1,750
        let result = assess_state(&reference, &QuizInput::new(10).with_state(State::GA));
        assert_eq!(result.qualified_hires, Decimal::from(3));
        assert_eq!(result.credit, Decimal::from(5_250));
    }

    #[test]
    fn test_disabled_program_is_reported_but_pays_nothing() {
        let reference = ReferenceData::builtin();
        let result = assess_state(&reference, &QuizInput::new(10).with_state(State::TX));
        assert!(result.program.is_some_and(|p| !p.enabled));
        assert_eq!(result.credit, Decimal::ZERO);
    }

    #[test]
    fn test_no_program_or_no_state() {
        let reference = ReferenceData::builtin();
        let result = assess_state(&reference, &QuizInput::new(10).with_state(State::WY));
        assert!(result.program.is_none());
        assert_eq!(result.credit, Decimal::ZERO);

        let result = assess_state(&reference, &QuizInput::new(10));
        assert!(result.program.is_none());
        assert_eq!(result.credit, Decimal::ZERO);
    }
}
