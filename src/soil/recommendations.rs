//! Soil amendment advice
//!
//! Two tiers, always in this order:
//! 1. Deficiency notes, one per triggered condition (N, P, K, pH, organic matter),
//!    or a single "well-balanced" note when none trigger.
//! 2. Two closing notes (soil suitability, crop rotation), always present.

use super::types::SoilReading;

/// Target levels below which an amendment is advised
const NITROGEN_TARGET: f64 = 100.0;
const PHOSPHORUS_TARGET: f64 = 40.0;
const POTASSIUM_TARGET: f64 = 100.0;
const PH_LOWER: f64 = 6.0;
const PH_UPPER: f64 = 7.0;
const ORGANIC_MATTER_TARGET: f64 = 3.0;

/// Dose per unit of deficit
const UREA_KG_PER_PPM: f64 = 1.5;
const DAP_KG_PER_PPM: f64 = 2.0;
const MOP_KG_PER_PPM: f64 = 1.2;
const LIME_KG_PER_PH: f64 = 2000.0;
const SULFUR_KG_PER_PH: f64 = 1500.0;
const COMPOST_TONS_PER_PERCENT: f64 = 10.0;

pub const BALANCED_NOTE: &str =
    "Soil nutrients are well-balanced. Continue current practices and monitor regularly.";
pub const ROTATION_NOTE: &str =
    "Consider crop rotation to maintain soil health and prevent nutrient depletion.";

fn dose(deficit: f64, rate: f64) -> i64 {
    (deficit * rate).round() as i64
}

/// Build the ordered advice list for a reading.
pub fn soil_recommendations(reading: &SoilReading) -> Vec<String> {
    let mut recommendations = Vec::new();

    if reading.nitrogen < NITROGEN_TARGET {
        recommendations.push(format!(
            "Apply nitrogen fertilizer. Recommended dose: {} kg/ha of urea.",
            dose(NITROGEN_TARGET - reading.nitrogen, UREA_KG_PER_PPM)
        ));
    }

    if reading.phosphorus < PHOSPHORUS_TARGET {
        recommendations.push(format!(
            "Apply phosphorus fertilizer. Recommended dose: {} kg/ha of DAP.",
            dose(PHOSPHORUS_TARGET - reading.phosphorus, DAP_KG_PER_PPM)
        ));
    }

    if reading.potassium < POTASSIUM_TARGET {
        recommendations.push(format!(
            "Apply potassium fertilizer. Recommended dose: {} kg/ha of MOP.",
            dose(POTASSIUM_TARGET - reading.potassium, MOP_KG_PER_PPM)
        ));
    }

    // At most one of lime / sulfur
    if reading.ph < PH_LOWER {
        recommendations.push(format!(
            "Apply lime to increase pH. Recommended dose: {} kg/ha of agricultural lime.",
            dose(PH_LOWER - reading.ph, LIME_KG_PER_PH)
        ));
    } else if reading.ph > PH_UPPER {
        recommendations.push(format!(
            "Apply sulfur to decrease pH. Recommended dose: {} kg/ha of elemental sulfur.",
            dose(reading.ph - PH_UPPER, SULFUR_KG_PER_PH)
        ));
    }

    if reading.organic_matter_percent < ORGANIC_MATTER_TARGET {
        recommendations.push(format!(
            "Add organic matter. Recommended: {} tons/ha of compost or manure.",
            dose(ORGANIC_MATTER_TARGET - reading.organic_matter_percent, COMPOST_TONS_PER_PERCENT)
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(BALANCED_NOTE.to_string());
    }

    recommendations.push(format!(
        "With the current nutrient levels, {} soil is suitable for most crops.",
        reading.soil_type
    ));
    recommendations.push(ROTATION_NOTE.to_string());

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(n: f64, p: f64, k: f64, ph: f64, om: f64) -> SoilReading {
        SoilReading {
            nitrogen: n,
            phosphorus: p,
            potassium: k,
            ph,
            organic_matter_percent: om,
            soil_type: "clay".to_string(),
        }
    }

    #[test]
    fn test_balanced_soil_gets_three_notes() {
        let recs = soil_recommendations(&reading(150.0, 60.0, 150.0, 6.5, 4.0));
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0], BALANCED_NOTE);
        assert!(recs[1].contains("clay soil"));
        assert_eq!(recs[2], ROTATION_NOTE);
    }

    #[test]
    fn test_every_deficiency_in_order() {
        let recs = soil_recommendations(&reading(50.0, 15.0, 50.0, 4.5, 0.5));
        assert_eq!(recs.len(), 7);
        assert!(recs[0].contains("75 kg/ha of urea"));
        assert!(recs[1].contains("50 kg/ha of DAP"));
        assert!(recs[2].contains("60 kg/ha of MOP"));
        assert!(recs[3].contains("3000 kg/ha of agricultural lime"));
        assert!(recs[4].contains("25 tons/ha of compost"));
        assert!(!recs.iter().any(|r| r == BALANCED_NOTE));
        assert_eq!(recs[6], ROTATION_NOTE);
    }

    #[test]
    fn test_alkaline_soil_gets_sulfur_only() {
        let recs = soil_recommendations(&reading(150.0, 60.0, 150.0, 7.8, 4.0));
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("1200 kg/ha of elemental sulfur"));
        assert!(!recs.iter().any(|r| r.contains("lime")));
    }

    #[test]
    fn test_ph_band_edges_need_no_adjustment() {
        for ph in [6.0, 7.0] {
            let recs = soil_recommendations(&reading(150.0, 60.0, 150.0, ph, 4.0));
            assert_eq!(recs[0], BALANCED_NOTE, "pH {}", ph);
        }
    }

    #[test]
    fn test_doses_round_to_nearest() {
        // (100 - 99.7) * 1.5 = 0.45 -> 0
        let recs = soil_recommendations(&reading(99.7, 60.0, 150.0, 6.5, 4.0));
        assert!(recs[0].contains(" 0 kg/ha of urea"));
        // (40 - 38.7) * 2 = 2.6 -> 3
        let recs = soil_recommendations(&reading(150.0, 38.7, 150.0, 6.5, 4.0));
        assert!(recs[0].contains(" 3 kg/ha of DAP"));
    }
}
