//! Reference tables
//!
//! Static, read-only lookup data keyed by crop / soil / water identifiers.

pub mod lookup_tables;

pub use lookup_tables::{
    base_yield, crop_duration_days, normalize_key, soil_multiplier, water_multiplier,
    water_requirement, DEFAULT_BASE_YIELD, DEFAULT_DURATION_DAYS, DEFAULT_MULTIPLIER,
    DEFAULT_WATER_REQUIREMENT,
};
