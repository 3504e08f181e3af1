//! API handlers for the quiz API server
//!
//! Provides REST endpoints for:
//! - Reference tables (WOTC categories, states, R&D tiers, zone lookup)
//! - Credit estimates for the business quiz
//! - Refund estimates for the individual quiz
//!
//! Raw form values are coerced here, before they reach the engine. Numeric
//! garbage becomes zero rather than an error so a half-filled quiz still
//! gets an estimate.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    Json,
};
use credit_engine::money::format_currency;
use credit_engine::reference::{RdTier, StateProgram, WotcCategory};
use credit_engine::{
    estimate_refund, CreditResult, FilingStatus, QuizInput, RefundEstimate, State as UsState,
    WotcCategoryId,
};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

lazy_static! {
    /// `NNNNN` or `NNNNN-NNNN`
    static ref ZIP_PATTERN: Regex =
        Regex::new(r"^(\d{5})(?:-\d{4})?$").unwrap();
}

// ============================================================
// Coercion
// ============================================================

/// Read a number from a JSON number or numeric string; anything else is `None`
fn decimal_from_value(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().replace(',', ""),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Missing, malformed and negative amounts all become zero
pub fn coerce_amount(value: Option<&Value>) -> Decimal {
    value
        .and_then(decimal_from_value)
        .map_or(Decimal::ZERO, |d| d.max(Decimal::ZERO))
}

/// Whole hires, saturating at `u32::MAX`
pub fn coerce_count(value: Option<&Value>) -> u32 {
    coerce_amount(value).floor().to_u32().unwrap_or(u32::MAX)
}

/// Five-digit ZIP, or empty when the input is not a US ZIP
pub fn coerce_zip(raw: Option<&str>) -> String {
    raw.and_then(|z| ZIP_PATTERN.captures(z.trim()))
        .and_then(|c| c.get(1))
        .map_or_else(String::new, |m| m.as_str().to_string())
}

/// Known category ids in any order; unknown ids and non-strings are dropped
pub fn coerce_categories(raw: &[Value]) -> Vec<WotcCategoryId> {
    raw.iter()
        .filter_map(Value::as_str)
        .filter_map(WotcCategoryId::parse)
        .collect()
}

// ============================================================
// Health
// ============================================================

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "quiz-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================
// Reference tables
// ============================================================

#[derive(Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<WotcCategory>,
    pub count: usize,
}

/// Handler: GET /api/categories
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let categories = state.engine.reference().wotc_categories.clone();
    let count = categories.len();

    Json(CategoryListResponse {
        success: true,
        categories,
        count,
    })
}

/// State with its hiring credit program, if it has one
#[derive(Serialize)]
pub struct StateInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub program: Option<StateProgram>,
}

#[derive(Serialize)]
pub struct StateListResponse {
    pub success: bool,
    pub states: Vec<StateInfo>,
    pub count: usize,
}

fn state_info(state: &AppState, us_state: UsState) -> StateInfo {
    StateInfo {
        code: us_state.code(),
        name: us_state.name(),
        program: state.engine.reference().state_program(us_state).cloned(),
    }
}

/// Handler: GET /api/states
pub async fn handle_list_states(State(state): State<AppState>) -> Json<StateListResponse> {
    let states: Vec<StateInfo> = UsState::all()
        .iter()
        .map(|s| state_info(&state, *s))
        .collect();
    let count = states.len();

    Json(StateListResponse {
        success: true,
        states,
        count,
    })
}

/// Handler: GET /api/states/:code
pub async fn handle_get_state(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StateInfo>, ServerError> {
    let us_state = UsState::parse_code(&code)
        .ok_or_else(|| ServerError::NotFound(format!("State '{}'", code)))?;
    Ok(Json(state_info(&state, us_state)))
}

#[derive(Serialize)]
pub struct TierListResponse {
    pub success: bool,
    pub tiers: Vec<RdTier>,
}

/// Handler: GET /api/rd-tiers
pub async fn handle_list_rd_tiers(State(state): State<AppState>) -> Json<TierListResponse> {
    Json(TierListResponse {
        success: true,
        tiers: state.engine.reference().rd_tiers.clone(),
    })
}

#[derive(Serialize)]
pub struct ZoneLookupResponse {
    pub success: bool,
    pub zip: String,
    pub in_zone: bool,
}

/// Handler: GET /api/zones/:zip
pub async fn handle_zone_lookup(
    State(state): State<AppState>,
    Path(raw_zip): Path<String>,
) -> Result<Json<ZoneLookupResponse>, ServerError> {
    let zip = coerce_zip(Some(&raw_zip));
    if zip.is_empty() {
        return Err(ServerError::InvalidRequest(format!(
            "Invalid ZIP code '{}'",
            raw_zip
        )));
    }

    let in_zone = state.engine.reference().in_empowerment_zone(&zip);
    debug!("Zone lookup: zip={}, in_zone={}", zip, in_zone);

    Ok(Json(ZoneLookupResponse {
        success: true,
        zip,
        in_zone,
    }))
}

// ============================================================
// Credit calculation
// ============================================================

/// Raw business quiz answers, as posted by the form
#[derive(Debug, Default, Deserialize)]
pub struct CalculateRequest {
    /// Hires in the last 12 months
    pub hires: Option<Value>,

    /// State code or name (e.g., "GA", "Georgia")
    pub state: Option<String>,

    /// ZIP code (`NNNNN` or `NNNNN-NNNN`)
    pub zip: Option<String>,

    /// R&D spend in dollars
    pub rd_spend: Option<Value>,

    /// WOTC category ids (e.g., "veterans", "snap")
    #[serde(default)]
    pub categories: Vec<Value>,
}

impl CalculateRequest {
    /// Sanitize into engine input
    pub fn into_quiz_input(self) -> QuizInput {
        QuizInput {
            hires: coerce_count(self.hires.as_ref()),
            state: self.state.as_deref().and_then(UsState::parse_code),
            zip: coerce_zip(self.zip.as_deref()),
            rd_spend: coerce_amount(self.rd_spend.as_ref()),
            categories: coerce_categories(&self.categories).into_iter().collect(),
        }
    }
}

#[derive(Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: CreditResult,
    /// Total as display text (`$32,500`)
    pub formatted_total: String,
}

/// Handler: POST /api/calculate
pub async fn handle_calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Json<CalculateResponse> {
    let input = req.into_quiz_input();
    debug!("Quiz input: {:?}", input);

    let result = state.engine.calculate(&input);
    info!(
        "Credit estimate: hires={}, state={:?}, categories={}, total={}",
        input.hires,
        input.state,
        input.categories.len(),
        result.total
    );

    let formatted_total = format_currency(result.total);
    Json(CalculateResponse {
        success: true,
        result,
        formatted_total,
    })
}

// ============================================================
// Refund estimate
// ============================================================

/// Raw refund quiz answers
#[derive(Debug, Default, Deserialize)]
pub struct RefundRequest {
    /// Annual gross income in dollars
    pub income: Option<Value>,

    /// `single`, `married` or `head`; defaults to `single`
    pub filing_status: Option<String>,
}

#[derive(Serialize)]
pub struct RefundResponse {
    pub success: bool,
    #[serde(flatten)]
    pub estimate: RefundEstimate,
    /// Refund figure as display text (`$1,000`)
    pub formatted_refund: String,
}

/// Handler: POST /api/refund
pub async fn handle_refund(
    Json(req): Json<RefundRequest>,
) -> Result<Json<RefundResponse>, ServerError> {
    let status = match req.filing_status.as_deref() {
        None => FilingStatus::Single,
        Some(raw) => FilingStatus::parse(raw).ok_or_else(|| {
            ServerError::InvalidRequest(format!(
                "Invalid filing status '{}'. Must be 'single', 'married', or 'head'",
                raw
            ))
        })?,
    };

    let income = coerce_amount(req.income.as_ref());
    let estimate = estimate_refund(income, status);
    info!(
        "Refund estimate: status={:?}, income={}, tax={}",
        status, estimate.gross_income, estimate.federal_tax
    );

    let formatted_refund = format_currency(estimate.potential_refund);
    Ok(Json(RefundResponse {
        success: true,
        estimate,
        formatted_refund,
    }))
}
