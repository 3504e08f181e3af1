//! Static reference tables behind the credit calculator
//!
//! The builtin tables are built once on first use and shared. A deployment
//! can swap in its own tables as a JSON document with the same shape as the
//! serialized builtin; those are validated before use.

pub mod rd;
pub mod states;
pub mod wotc;
pub mod zones;

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ReferenceError;
use crate::jurisdiction::State;

pub use rd::RdTier;
pub use states::StateProgram;
pub use wotc::{WotcCategory, WotcCategoryId};
pub use zones::EmpowermentZoneConfig;

lazy_static! {
    static ref BUILTIN_REFERENCE: Arc<ReferenceData> = Arc::new(ReferenceData {
        wotc_categories: wotc::builtin_categories(),
        rd_tiers: rd::builtin_tiers(),
        empowerment_zone: EmpowermentZoneConfig::builtin(),
        state_programs: states::builtin_programs(),
    });
}

/// Everything the calculator looks up: WOTC groups, R&D tiers, the zone list
/// and per-state programs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Ordered; earlier rows win percentage ties
    pub wotc_categories: Vec<WotcCategory>,
    pub rd_tiers: Vec<RdTier>,
    pub empowerment_zone: EmpowermentZoneConfig,
    pub state_programs: BTreeMap<State, StateProgram>,
}

impl ReferenceData {
    /// Shared handle to the builtin tables
    pub fn builtin() -> Arc<ReferenceData> {
        Arc::clone(&BUILTIN_REFERENCE)
    }

    /// Parse and validate replacement tables
    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let data: ReferenceData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn wotc_category(&self, id: WotcCategoryId) -> Option<&WotcCategory> {
        self.wotc_categories.iter().find(|c| c.id == id)
    }

    pub fn state_program(&self, state: State) -> Option<&StateProgram> {
        self.state_programs.get(&state)
    }

    pub fn rd_tier_for(&self, spend: Decimal) -> Option<&RdTier> {
        rd::tier_for(&self.rd_tiers, spend)
    }

    pub fn in_empowerment_zone(&self, zip: &str) -> bool {
        self.empowerment_zone.contains(zip)
    }

    /// Check every invariant the calculator relies on
    pub fn validate(&self) -> Result<(), ReferenceError> {
        let mut seen = HashSet::new();
        for category in &self.wotc_categories {
            if !seen.insert(category.id) {
                return Err(ReferenceError::DuplicateCategory(category.id.to_string()));
            }
            let field = format!("wotc_categories.{}", category.id);
            check_fraction(&format!("{}.percentage", field), category.percentage)?;
            check_amount(&format!("{}.credit_amount", field), category.credit_amount)?;
        }

        rd::validate_tiers(&self.rd_tiers)?;
        for tier in &self.rd_tiers {
            check_fraction(&format!("rd_tiers.{}.qualify_chance", tier.name), tier.qualify_chance)?;
        }

        let zone = &self.empowerment_zone;
        check_fraction(
            "empowerment_zone.percentage_of_employees",
            zone.percentage_of_employees,
        )?;
        check_amount("empowerment_zone.credit_per_employee", zone.credit_per_employee)?;
        if let Some(bad) = zone.zones.iter().find(|z| !zones::is_valid_zip(z)) {
            return Err(ReferenceError::InvalidZip(bad.clone()));
        }

        for (state, program) in &self.state_programs {
            let field = format!("state_programs.{}", state);
            check_fraction(&format!("{}.percentage", field), program.percentage)?;
            check_amount(&format!("{}.credit_per_hire", field), program.credit_per_hire)?;
        }

        Ok(())
    }
}

fn check_fraction(field: &str, value: Decimal) -> Result<(), ReferenceError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ReferenceError::InvalidPercentage {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_amount(field: &str, value: Decimal) -> Result<(), ReferenceError> {
    if value < Decimal::ZERO {
        return Err(ReferenceError::NegativeAmount {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
