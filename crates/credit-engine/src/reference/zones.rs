//! Empowerment zone membership
//!
//! Urban empowerment zones are matched by 5-digit ZIP code. The builtin list
//! covers the residential ZIPs of the designated zones in Atlanta, Baltimore,
//! Chicago, Cleveland, Detroit, Los Angeles, New York and Philadelphia/Camden.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const EMPOWERMENT_ZONE_ZIPS: &[&str] = &[
    // Atlanta
    "30303", "30310", "30312", "30313", "30314", "30315", "30318",
    // Baltimore
    "21201", "21202", "21205", "21213", "21217", "21223", "21230", "21231",
    // Chicago
    "60608", "60609", "60612", "60616", "60621", "60622", "60623", "60624", "60637", "60644",
    "60651", "60653",
    // Cleveland
    "44103", "44104", "44105", "44108", "44114", "44115", "44127",
    // Detroit
    "48201", "48202", "48204", "48206", "48207", "48208", "48210", "48211", "48216",
    // Los Angeles
    "90001", "90002", "90003", "90011", "90021", "90058", "90059",
    // New York (Upper Manhattan, South Bronx)
    "10026", "10027", "10029", "10030", "10035", "10037", "10039", "10451", "10454", "10455",
    "10474",
    // Philadelphia / Camden
    "08102", "08103", "08104", "19121", "19122", "19132", "19133",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpowermentZoneConfig {
    /// Fraction of hires assumed to live and work in the zone
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage_of_employees: Decimal,
    /// Credit per in-zone employee, in dollars
    #[serde(with = "rust_decimal::serde::float")]
    pub credit_per_employee: Decimal,
    pub zones: BTreeSet<String>,
}

impl EmpowermentZoneConfig {
    pub fn builtin() -> Self {
        Self {
            percentage_of_employees: Decimal::new(15, 2),
            credit_per_employee: Decimal::from(3_000),
            zones: EMPOWERMENT_ZONE_ZIPS.iter().map(|z| z.to_string()).collect(),
        }
    }

    /// Exact match against the zone list; empty ZIPs are never in a zone
    pub fn contains(&self, zip: &str) -> bool {
        !zip.is_empty() && self.zones.contains(zip)
    }
}

/// A ZIP code is five ASCII digits
pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}
