//! Farm plan deriver
//!
//! Farm size, crop, soil, water source and planting date in; harvest date,
//! expected yield, water requirement, a five-step timeline and advice out.
//!
//! Only a non-positive farm size or an unparseable date is an error.
//! Unknown crop / soil / water keys use the lookup-table defaults.

pub mod timeline;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{FarmError, Result};
use crate::reference::{
    base_yield, crop_duration_days, soil_multiplier, water_multiplier, water_requirement,
};
use crate::utils::round_to;

pub use timeline::{build_timeline, TimelineActivity, TimelineEvent, MILESTONES};

/// Accepted planting date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Plants per acre, used for the planting density advice
const PLANTING_DENSITY_PER_ACRE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmPlanRequest {
    pub farm_size_acres: f64,
    pub crop: String,
    pub soil_type: String,
    pub water_source: String,
    /// `YYYY-MM-DD`
    pub planting_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmPlanResult {
    pub planting_date: NaiveDate,
    pub harvest_date: NaiveDate,
    pub duration_days: u32,
    pub expected_yield_tons: f64,
    pub water_requirement_liters: f64,
    pub timeline: Vec<TimelineEvent>,
    pub recommendations: Vec<String>,
}

/// Parse a form date (`2024-01-01`).
pub fn parse_planting_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
        FarmError::InvalidInput(format!("planting date '{}' is not YYYY-MM-DD: {}", raw, e))
    })
}

/// `date + days`, failing only past chrono's calendar range
pub(crate) fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days))).ok_or_else(|| {
        FarmError::InvalidInput(format!("{} + {} days is out of range", date, days))
    })
}

fn plan_recommendations(req: &FarmPlanRequest) -> Vec<String> {
    let density = (req.farm_size_acres * PLANTING_DENSITY_PER_ACRE).round() as i64;

    vec![
        format!(
            "Consider planting {} about 2 weeks earlier than the traditional window for better yield",
            req.crop
        ),
        format!(
            "{} soil is suitable for {} with proper amendments",
            req.soil_type, req.crop
        ),
        format!(
            "{} water supply should be adequate for this growing season",
            req.water_source
        ),
        format!("Recommended planting density: {} plants per acre", density),
        "Monitor soil moisture every 3 days to keep irrigation on schedule".to_string(),
    ]
}

/// Derive a farm plan.
pub fn plan(req: &FarmPlanRequest) -> Result<FarmPlanResult> {
    if !(req.farm_size_acres.is_finite() && req.farm_size_acres > 0.0) {
        return Err(FarmError::InvalidInput(format!(
            "farm size must be a positive number of acres, got {}",
            req.farm_size_acres
        )));
    }

    let planting_date = parse_planting_date(&req.planting_date)?;
    let duration_days = crop_duration_days(&req.crop);
    let harvest_date = add_days(planting_date, duration_days)?;

    let expected_yield_tons = round_to(
        base_yield(&req.crop)
            * soil_multiplier(&req.soil_type)
            * water_multiplier(&req.water_source)
            * req.farm_size_acres,
        1,
    );
    let water_requirement_liters = water_requirement(&req.crop) * req.farm_size_acres;

    let timeline = build_timeline(planting_date, duration_days, &req.crop, &req.soil_type)?;

    tracing::debug!(
        "Planned {} acres of {}: harvest {}, {} t, {} L",
        req.farm_size_acres,
        req.crop,
        harvest_date,
        expected_yield_tons,
        water_requirement_liters
    );

    Ok(FarmPlanResult {
        planting_date,
        harvest_date,
        duration_days,
        expected_yield_tons,
        water_requirement_liters,
        timeline,
        recommendations: plan_recommendations(req),
    })
}
