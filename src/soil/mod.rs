//! Soil health scoring
//!
//! Turns one soil test (N/P/K ppm, pH, organic matter %) into a 0-100 score,
//! per-nutrient display statuses and an ordered list of amendment advice.

pub mod types;
pub mod scoring;
pub mod recommendations;

pub use types::{
    Nutrient, NutrientIndicator, NutrientStatus, PhStatus, SoilBand, SoilReading,
    SoilScoreResult, SubScores,
};
pub use scoring::{score, sub_scores};
pub use recommendations::soil_recommendations;
