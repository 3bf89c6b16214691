use serde::{Deserialize, Serialize};

/// One soil test, as entered on the soil calculator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    /// ppm
    pub nitrogen: f64,
    /// ppm
    pub phosphorus: f64,
    /// ppm
    pub potassium: f64,
    pub ph: f64,
    pub organic_matter_percent: f64,
    pub soil_type: String,
}

/// Overall soil health tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SoilBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SoilBand {
    /// Band is a pure function of the total score
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => SoilBand::Excellent,
            s if s >= 70 => SoilBand::Good,
            s if s >= 55 => SoilBand::Fair,
            _ => SoilBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilBand::Poor => "Poor",
            SoilBand::Fair => "Fair",
            SoilBand::Good => "Good",
            SoilBand::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// ppm value that fills the display bar (100%)
    pub fn reference_max(&self) -> f64 {
        match self {
            Nutrient::Nitrogen => 200.0,
            Nutrient::Phosphorus => 80.0,
            Nutrient::Potassium => 200.0,
        }
    }
}

/// Display status for a nutrient bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientStatus {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Good,
}

impl NutrientStatus {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 70.0 {
            NutrientStatus::Good
        } else if percent >= 40.0 {
            NutrientStatus::Low
        } else {
            NutrientStatus::VeryLow
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhStatus {
    Optimal,
    Acceptable,
    #[serde(rename = "Needs Adjustment")]
    NeedsAdjustment,
}

/// Display bar for one nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientIndicator {
    pub nutrient: Nutrient,
    /// 0-100
    pub percent: f64,
    pub status: NutrientStatus,
}

/// The five independently bounded parts of the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubScores {
    pub nitrogen: u32,       // <= 25
    pub phosphorus: u32,     // <= 25
    pub potassium: u32,      // <= 25
    pub ph: u32,             // <= 15
    pub organic_matter: u32, // <= 10
}

impl SubScores {
    pub fn total(&self) -> u32 {
        self.nitrogen + self.phosphorus + self.potassium + self.ph + self.organic_matter
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilScoreResult {
    /// 0-100, sum of `sub_scores`
    pub score: u32,
    pub band: SoilBand,
    pub sub_scores: SubScores,
    /// Nitrogen, phosphorus, potassium, in that order
    pub nutrients: Vec<NutrientIndicator>,
    pub ph_percent: f64,
    pub ph_status: PhStatus,
    pub recommendations: Vec<String>,
}

impl SoilScoreResult {
    pub fn nutrient_status(&self, nutrient: Nutrient) -> Option<NutrientStatus> {
        self.nutrients
            .iter()
            .find(|n| n.nutrient == nutrient)
            .map(|n| n.status)
    }
}
