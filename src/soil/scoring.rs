//! Soil Health Score
//!
//! Each input is scored by a step function over inclusive bands, checked in
//! priority order (first match wins). Values outside every band get the
//! rule's floor, so the scorer never rejects a reading.
//!
//! | Input          | 1st band      | 2nd band      | 3rd band      | floor |
//! |----------------|---------------|---------------|---------------|-------|
//! | Nitrogen ppm   | 100-200 → 25  | 80-250 → 20   | 60-300 → 15   | 10    |
//! | Phosphorus ppm | 40-80 → 25    | 30-100 → 20   | 20-120 → 15   | 10    |
//! | Potassium ppm  | 100-200 → 25  | 80-250 → 20   | 60-300 → 15   | 10    |
//! | pH             | 6.0-7.0 → 15  | 5.5-7.5 → 12  | 5.0-8.0 → 8   | 5     |
//! | Organic matter | 3-5 → 10      | 2-6 → 8       | 1-7 → 5       | 3     |

use super::recommendations::soil_recommendations;
use super::types::*;

/// Inclusive `[lower, upper]` band worth `points`
#[derive(Debug, Clone, Copy)]
pub struct ScoreBand {
    pub lower: f64,
    pub upper: f64,
    pub points: u32,
}

impl ScoreBand {
    fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SubScoreRule {
    pub bands: &'static [ScoreBand],
    pub floor: u32,
}

impl SubScoreRule {
    pub fn points(&self, value: f64) -> u32 {
        self.bands
            .iter()
            .find(|band| band.contains(value))
            .map_or(self.floor, |band| band.points)
    }

    /// Highest attainable points for this rule
    pub fn max_points(&self) -> u32 {
        self.bands.first().map_or(self.floor, |band| band.points)
    }
}

// ============================================================================
// BAND TABLES
// ============================================================================

pub static NITROGEN_RULE: SubScoreRule = SubScoreRule {
    bands: &[
        ScoreBand { lower: 100.0, upper: 200.0, points: 25 },
        ScoreBand { lower: 80.0, upper: 250.0, points: 20 },
        ScoreBand { lower: 60.0, upper: 300.0, points: 15 },
    ],
    floor: 10,
};

pub static PHOSPHORUS_RULE: SubScoreRule = SubScoreRule {
    bands: &[
        ScoreBand { lower: 40.0, upper: 80.0, points: 25 },
        ScoreBand { lower: 30.0, upper: 100.0, points: 20 },
        ScoreBand { lower: 20.0, upper: 120.0, points: 15 },
    ],
    floor: 10,
};

pub static POTASSIUM_RULE: SubScoreRule = SubScoreRule {
    bands: &[
        ScoreBand { lower: 100.0, upper: 200.0, points: 25 },
        ScoreBand { lower: 80.0, upper: 250.0, points: 20 },
        ScoreBand { lower: 60.0, upper: 300.0, points: 15 },
    ],
    floor: 10,
};

pub static PH_RULE: SubScoreRule = SubScoreRule {
    bands: &[
        ScoreBand { lower: 6.0, upper: 7.0, points: 15 },
        ScoreBand { lower: 5.5, upper: 7.5, points: 12 },
        ScoreBand { lower: 5.0, upper: 8.0, points: 8 },
    ],
    floor: 5,
};

pub static ORGANIC_MATTER_RULE: SubScoreRule = SubScoreRule {
    bands: &[
        ScoreBand { lower: 3.0, upper: 5.0, points: 10 },
        ScoreBand { lower: 2.0, upper: 6.0, points: 8 },
        ScoreBand { lower: 1.0, upper: 7.0, points: 5 },
    ],
    floor: 3,
};

// ============================================================================
// SCORING
// ============================================================================

pub fn sub_scores(reading: &SoilReading) -> SubScores {
    SubScores {
        nitrogen: NITROGEN_RULE.points(reading.nitrogen),
        phosphorus: PHOSPHORUS_RULE.points(reading.phosphorus),
        potassium: POTASSIUM_RULE.points(reading.potassium),
        ph: PH_RULE.points(reading.ph),
        organic_matter: ORGANIC_MATTER_RULE.points(reading.organic_matter_percent),
    }
}

/// Bar width for a nutrient, clamped to 0-100
fn display_percent(value: f64, reference_max: f64) -> f64 {
    (value / reference_max * 100.0).clamp(0.0, 100.0)
}

/// pH 4 maps to 0%, pH 8 to 100%
fn ph_display_percent(ph: f64) -> f64 {
    ((ph - 4.0) / 4.0 * 100.0).clamp(0.0, 100.0)
}

/// Uses the pH score bands, not the display percent
fn ph_status(ph: f64) -> PhStatus {
    let bands = PH_RULE.bands;
    if bands[0].contains(ph) {
        PhStatus::Optimal
    } else if bands[1].contains(ph) {
        PhStatus::Acceptable
    } else {
        PhStatus::NeedsAdjustment
    }
}

fn nutrient_indicator(nutrient: Nutrient, value: f64) -> NutrientIndicator {
    let percent = display_percent(value, nutrient.reference_max());
    NutrientIndicator {
        nutrient,
        percent,
        status: NutrientStatus::from_percent(percent),
    }
}

/// Score one soil test.
///
/// Never fails: implausible values land in the floor band of their rule.
pub fn score(reading: &SoilReading) -> SoilScoreResult {
    let sub_scores = sub_scores(reading);
    let score = sub_scores.total();
    let band = SoilBand::from_score(score);

    let nutrients = vec![
        nutrient_indicator(Nutrient::Nitrogen, reading.nitrogen),
        nutrient_indicator(Nutrient::Phosphorus, reading.phosphorus),
        nutrient_indicator(Nutrient::Potassium, reading.potassium),
    ];

    let recommendations = soil_recommendations(reading);

    tracing::debug!(
        "Soil score {} ({}) for {} soil, {} recommendations",
        score,
        band.label(),
        reading.soil_type,
        recommendations.len()
    );

    SoilScoreResult {
        score,
        band,
        sub_scores,
        nutrients,
        ph_percent: ph_display_percent(reading.ph),
        ph_status: ph_status(reading.ph),
        recommendations,
    }
}
