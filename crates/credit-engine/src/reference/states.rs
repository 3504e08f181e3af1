//! State hiring-credit programs
//!
//! Programs that exist but are switched off stay in the table with
//! `enabled: false` so the results page can still name them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::jurisdiction::State;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateProgram {
    pub name: String,
    pub enabled: bool,
    /// Fraction of hires assumed to qualify
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub credit_per_hire: Decimal,
}

// (state, program name, enabled, percentage in hundredths, credit per hire)
const STATE_PROGRAMS: &[(State, &str, bool, i64, i64)] = &[
    (State::AZ, "Arizona Quality Jobs Tax Credit", true, 10, 3_000),
    (State::CA, "California New Employment Credit", true, 10, 3_000),
    (State::CO, "Colorado Enterprise Zone New Employee Credit", true, 15, 1_100),
    (State::CT, "Connecticut Job Expansion Tax Credit", false, 10, 2_500),
    (State::FL, "Florida Enterprise Zone Jobs Credit", false, 10, 1_500),
    (State::GA, "Georgia Job Tax Credit", true, 25, 1_750),
    (State::IL, "Illinois EDGE Tax Credit", true, 10, 2_000),
    (State::IN, "Indiana EDGE Credit", false, 10, 1_500),
    (State::KY, "Kentucky Business Investment Program", true, 10, 2_000),
    (State::LA, "Louisiana Enterprise Zone Program", true, 15, 3_500),
    (State::MI, "Michigan Good Jobs for Michigan", false, 5, 2_500),
    (State::MS, "Mississippi Jobs Tax Credit", true, 20, 1_000),
    (State::NJ, "New Jersey Emerge Program", true, 10, 3_000),
    (State::NY, "New York Excelsior Jobs Program", true, 10, 3_000),
    (State::NC, "North Carolina Job Development Investment Grant", false, 5, 2_000),
    (State::OH, "Ohio Job Creation Tax Credit", true, 10, 1_500),
    (State::OK, "Oklahoma Quality Jobs Program", true, 10, 1_000),
    (State::PA, "Pennsylvania Job Creation Tax Credit", true, 10, 1_000),
    (State::SC, "South Carolina Jobs Tax Credit", true, 20, 1_500),
    (State::TN, "Tennessee Jobs Tax Credit", true, 10, 4_500),
    (State::TX, "Texas Enterprise Fund", false, 5, 2_000),
    (State::VA, "Virginia Major Business Facility Job Tax Credit", true, 10, 1_000),
    (State::WV, "West Virginia Economic Opportunity Tax Credit", true, 10, 3_000),
    (State::WI, "Wisconsin Business Development Credit", true, 10, 2_000),
];

pub fn builtin_programs() -> BTreeMap<State, StateProgram> {
    STATE_PROGRAMS
        .iter()
        .map(|&(state, name, enabled, hundredths, credit)| {
            (
                state,
                StateProgram {
                    name: name.to_string(),
                    enabled,
                    percentage: Decimal::new(hundredths, 2),
                    credit_per_hire: Decimal::from(credit),
                },
            )
        })
        .collect()
}
