//! R&D credit tiers
//!
//! Tiers are half-open dollar ranges `[min, max)`, contiguous and ascending.
//! Only the last tier may be unbounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ReferenceError;

/// Share of qualified R&D spend claimed as the base credit
pub const BASE_CREDIT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdTier {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    /// Exclusive upper bound; `None` means no ceiling
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub max: Option<Decimal>,
    /// Conservatism multiplier applied to the base credit
    #[serde(with = "rust_decimal::serde::float")]
    pub qualify_chance: Decimal,
    /// Typical credit for the tier. Shown to users, not used in the formula.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_credit: Decimal,
}

impl RdTier {
    fn new(name: &str, min: i64, max: Option<i64>, qualify_chance: Decimal, average: i64) -> Self {
        Self {
            name: name.to_string(),
            min: Decimal::from(min),
            max: max.map(Decimal::from),
            qualify_chance,
            average_credit: Decimal::from(average),
        }
    }

    /// Whether `spend` falls inside `[min, max)`
    pub fn contains(&self, spend: Decimal) -> bool {
        spend >= self.min && self.max.map_or(true, |max| spend < max)
    }
}

pub fn builtin_tiers() -> Vec<RdTier> {
    vec![
        RdTier::new("SMALL", 5_000, Some(25_000), Decimal::new(60, 2), 3_000),
        RdTier::new("MEDIUM", 25_000, Some(100_000), Decimal::new(70, 2), 12_000),
        RdTier::new("LARGE", 100_000, None, Decimal::new(80, 2), 35_000),
    ]
}

/// Find the tier whose range contains `spend`
///
/// Returns `None` below the floor of the first tier.
pub fn tier_for(tiers: &[RdTier], spend: Decimal) -> Option<&RdTier> {
    tiers.iter().find(|tier| tier.contains(spend))
}

/// Smallest spend that earns any R&D credit
pub fn tier_floor(tiers: &[RdTier]) -> Option<Decimal> {
    tiers.first().map(|tier| tier.min)
}

/// Check that tiers are non-empty, ascending, contiguous and that only the
/// last one is open-ended
pub(crate) fn validate_tiers(tiers: &[RdTier]) -> Result<(), ReferenceError> {
    let Some(last) = tiers.last() else {
        return Err(ReferenceError::InvalidTiers(
            "at least one tier is required".to_string(),
        ));
    };

    if last.max.is_some() {
        return Err(ReferenceError::InvalidTiers(format!(
            "last tier '{}' must have no upper bound",
            last.name
        )));
    }

    for pair in tiers.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        match lower.max {
            None => {
                return Err(ReferenceError::InvalidTiers(format!(
                    "tier '{}' is unbounded but is not the last tier",
                    lower.name
                )));
            }
            Some(max) if max != upper.min => {
                return Err(ReferenceError::InvalidTiers(format!(
                    "tier '{}' ends at {} but tier '{}' starts at {}",
                    lower.name, max, upper.name, upper.min
                )));
            }
            Some(_) => {}
        }
    }

    for tier in tiers {
        if tier.min.is_sign_negative() {
            return Err(ReferenceError::NegativeAmount {
                field: format!("rd_tiers.{}.min", tier.name),
                value: tier.min.to_string(),
            });
        }
        if tier.max.is_some_and(|max| max <= tier.min) {
            return Err(ReferenceError::InvalidTiers(format!(
                "tier '{}' has an empty range",
                tier.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_base_rate_is_twenty_percent() {
        assert_eq!(BASE_CREDIT_RATE, dec("0.20"));
    }

    #[test]
    fn test_tier_boundaries_are_half_open() {
        let tiers = builtin_tiers();
        assert!(tier_for(&tiers, dec("4999.99")).is_none());
        assert_eq!(tier_for(&tiers, dec("5000")).unwrap().name, "SMALL");
        assert_eq!(tier_for(&tiers, dec("24999.99")).unwrap().name, "SMALL");
        assert_eq!(tier_for(&tiers, dec("25000")).unwrap().name, "MEDIUM");
        assert_eq!(tier_for(&tiers, dec("99999.99")).unwrap().name, "MEDIUM");
        assert_eq!(tier_for(&tiers, dec("100000")).unwrap().name, "LARGE");
        assert_eq!(tier_for(&tiers, dec("25000000")).unwrap().name, "LARGE");
    }

    #[test]
    fn test_tier_floor() {
        assert_eq!(tier_floor(&builtin_tiers()), Some(dec("5000")));
        assert_eq!(tier_floor(&[]), None);
    }

    #[test]
    fn test_builtin_tiers_validate() {
        assert!(validate_tiers(&builtin_tiers()).is_ok());
    }

    #[test]
    fn test_rejects_gap_between_tiers() {
        let mut tiers = builtin_tiers();
        tiers[1].min = dec("30000");
        let err = validate_tiers(&tiers).unwrap_err();
        assert!(err.to_string().contains("SMALL"));
    }

    #[test]
    fn test_rejects_bounded_last_tier() {
        let mut tiers = builtin_tiers();
        tiers[2].max = Some(dec("500000"));
        assert!(matches!(
            validate_tiers(&tiers),
            Err(ReferenceError::InvalidTiers(_))
        ));
    }

    #[test]
    fn test_rejects_empty_tier_list() {
        assert!(validate_tiers(&[]).is_err());
    }
}
