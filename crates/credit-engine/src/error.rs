use thiserror::Error;

/// Problems found while loading replacement reference tables
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to parse reference data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be between 0 and 1 (found {value})")]
    InvalidPercentage { field: String, value: String },

    #[error("{field} must not be negative (found {value})")]
    NegativeAmount { field: String, value: String },

    #[error("Invalid R&D tiers: {0}")]
    InvalidTiers(String),

    #[error("Invalid empowerment zone ZIP code: '{0}'")]
    InvalidZip(String),

    #[error("WOTC category '{0}' is listed more than once")]
    DuplicateCategory(String),
}
