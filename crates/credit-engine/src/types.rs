use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::jurisdiction::State;
use crate::reference::{StateProgram, WotcCategoryId};

/// Sanitized quiz answers. Coercion of raw form values happens before this
/// is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizInput {
    /// People hired in the trailing 12 months
    #[serde(default)]
    pub hires: u32,
    #[serde(default)]
    pub state: Option<State>,
    /// 5-digit ZIP or empty
    #[serde(default)]
    pub zip: String,
    /// Dollars spent on R&D, never negative
    #[serde(default)]
    pub rd_spend: Decimal,
    #[serde(default)]
    pub categories: BTreeSet<WotcCategoryId>,
}

impl QuizInput {
    pub fn new(hires: u32) -> Self {
        Self {
            hires,
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    pub fn with_rd_spend(mut self, rd_spend: Decimal) -> Self {
        self.rd_spend = rd_spend;
        self
    }

    pub fn with_category(mut self, category: WotcCategoryId) -> Self {
        self.categories.insert(category);
        self
    }
}

/// Per-program dollar amounts, each rounded to the nearest hundred
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub wotc: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub rd: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub empowerment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub state: Decimal,
}

impl CreditBreakdown {
    /// Sum of the rounded components. Can differ from
    /// [`CreditResult::total`], which rounds the unrounded sum.
    pub fn sum(&self) -> Decimal {
        self.wotc + self.rd + self.empowerment + self.state
    }
}

/// Supporting figures shown next to the breakdown cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditDetails {
    pub wotc_qualified_hires: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub rd_qualify_chance: Decimal,
    pub empowerment_qualified: bool,
    /// Program on file for the selected state, even when it is disabled
    pub state_program: Option<StateProgram>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditResult {
    /// Unrounded sum of the resolved credits, rounded to the nearest hundred
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub breakdown: CreditBreakdown,
    pub details: CreditDetails,
}
