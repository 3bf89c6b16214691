//! Crop, Soil and Water Lookup Tables
//!
//! Maps the planner's crop / soil / water keys to the constants used by the
//! yield and water formulas.
//!
//! Keys are matched after trimming and lowercasing. Unknown keys never fail:
//! they resolve to the documented defaults below and are logged at debug.

/// Growing duration used when the crop key is unknown.
pub const DEFAULT_DURATION_DAYS: u32 = 100;

/// Base yield (tons per acre) used when the crop key is unknown.
pub const DEFAULT_BASE_YIELD: f64 = 5.0;

/// Water requirement (liters per acre) used when the crop key is unknown.
pub const DEFAULT_WATER_REQUIREMENT: f64 = 500.0;

/// Soil / water multiplier used when the key is unknown.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

// ============================================================================
// EMBEDDED TABLES
// ============================================================================

static CROP_DURATIONS: &[(&str, u32)] = &[
    ("wheat", 120),
    ("corn", 100),
    ("rice", 130),
    ("soybean", 110),
    ("tomato", 100),
    ("potato", 110),
];

// tons per acre
static BASE_YIELDS: &[(&str, f64)] = &[
    ("wheat", 3.5),
    ("corn", 7.5),
    ("rice", 4.5),
    ("soybean", 2.5),
    ("tomato", 25.0),
    ("potato", 20.0),
];

static SOIL_MULTIPLIERS: &[(&str, f64)] = &[
    ("clay", 0.9),
    ("loamy", 1.2),
    ("sandy", 0.8),
    ("silty", 1.1),
];

static WATER_MULTIPLIERS: &[(&str, f64)] = &[
    ("rainfed", 0.8),
    ("irrigation", 1.2),
    ("mixed", 1.0),
];

// liters per acre
static WATER_REQUIREMENTS: &[(&str, f64)] = &[
    ("wheat", 450.0),
    ("corn", 550.0),
    ("rice", 1200.0),
    ("soybean", 500.0),
    ("tomato", 600.0),
    ("potato", 500.0),
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Canonical form of a user-supplied key ("  Wheat " -> "wheat").
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    let key = normalize_key(key);
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

fn lookup_or<T: Copy + std::fmt::Debug>(
    table: &[(&str, T)],
    key: &str,
    default: T,
    what: &str,
) -> T {
    lookup(table, key).unwrap_or_else(|| {
        tracing::debug!("Unknown {} key '{}', using default {:?}", what, key, default);
        default
    })
}

/// Days from planting to harvest.
pub fn crop_duration_days(crop: &str) -> u32 {
    lookup_or(CROP_DURATIONS, crop, DEFAULT_DURATION_DAYS, "crop")
}

/// Base yield in tons per acre.
pub fn base_yield(crop: &str) -> f64 {
    lookup_or(BASE_YIELDS, crop, DEFAULT_BASE_YIELD, "crop")
}

/// Seasonal water requirement in liters per acre.
pub fn water_requirement(crop: &str) -> f64 {
    lookup_or(WATER_REQUIREMENTS, crop, DEFAULT_WATER_REQUIREMENT, "crop")
}

/// Yield multiplier for a soil type.
pub fn soil_multiplier(soil: &str) -> f64 {
    lookup_or(SOIL_MULTIPLIERS, soil, DEFAULT_MULTIPLIER, "soil")
}

/// Yield multiplier for a water source.
pub fn water_multiplier(water_source: &str) -> f64 {
    lookup_or(WATER_MULTIPLIERS, water_source, DEFAULT_MULTIPLIER, "water source")
}
