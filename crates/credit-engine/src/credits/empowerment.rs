// Empowerment zone employment credit estimate
use rust_decimal::Decimal;

use crate::money::qualified_count;
use crate::reference::ReferenceData;
use crate::types::QuizInput;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmpowermentAssessment {
    pub in_zone: bool,
    pub qualified_employees: Decimal,
    pub credit: Decimal,
}

/// `ceil(hires × zone_pct) × credit_per_employee` when the ZIP is in a zone
pub fn assess_empowerment(reference: &ReferenceData, input: &QuizInput) -> EmpowermentAssessment {
    let in_zone = reference.in_empowerment_zone(&input.zip);
    if !in_zone {
        return EmpowermentAssessment {
            in_zone,
            qualified_employees: Decimal::ZERO,
            credit: Decimal::ZERO,
        };
    }

    let zone = &reference.empowerment_zone;
    let qualified_employees = qualified_count(input.hires, zone.percentage_of_employees);
    EmpowermentAssessment {
        in_zone,
        qualified_employees,
        credit: qualified_employees * zone.credit_per_employee,
    }
}
