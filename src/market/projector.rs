//! Canned price series per time range
//!
//! | Range | Historical points | Projected points |
//! |-------|-------------------|------------------|
//! | 1m    | 4 weekly          | 1                |
//! | 3m    | 3 monthly         | 1                |
//! | 6m    | 6 monthly         | 2                |
//! | 1y    | 12 monthly        | 3                |

use serde::{Deserialize, Serialize};

use crate::utils::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeRange {
    /// Parse a range key; anything unrecognised means one year.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "1m" => TimeRange::OneMonth,
            "3m" => TimeRange::ThreeMonths,
            "6m" => TimeRange::SixMonths,
            "1y" => TimeRange::OneYear,
            other => {
                tracing::debug!("Unknown time range '{}', using 1y", other);
                TimeRange::OneYear
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1m",
            TimeRange::ThreeMonths => "3m",
            TimeRange::SixMonths => "6m",
            TimeRange::OneYear => "1y",
        }
    }
}

/// Canned data for one range ($/ton)
struct CannedSeries {
    labels: &'static [&'static str],
    historical: &'static [f64],
    projected_labels: &'static [&'static str],
    projected: &'static [f64],
}

static ONE_MONTH: CannedSeries = CannedSeries {
    labels: &["Week 1", "Week 2", "Week 3", "Week 4"],
    historical: &[240.0, 245.0, 250.0, 255.0],
    projected_labels: &["Week 5 (Predicted)"],
    projected: &[265.0],
};

static THREE_MONTHS: CannedSeries = CannedSeries {
    labels: &["Month 1", "Month 2", "Month 3"],
    historical: &[230.0, 240.0, 250.0],
    projected_labels: &["Month 4 (Predicted)"],
    projected: &[260.0],
};

static SIX_MONTHS: CannedSeries = CannedSeries {
    labels: &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
    historical: &[220.0, 225.0, 230.0, 240.0, 245.0, 250.0],
    projected_labels: &["Jul (Predicted)", "Aug (Predicted)"],
    projected: &[255.0, 260.0],
};

static ONE_YEAR: CannedSeries = CannedSeries {
    labels: &[
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    historical: &[
        210.0, 215.0, 220.0, 225.0, 230.0, 235.0, 240.0, 245.0, 250.0, 255.0, 260.0, 265.0,
    ],
    projected_labels: &["Jan (Predicted)", "Feb (Predicted)", "Mar (Predicted)"],
    projected: &[270.0, 275.0, 280.0],
};

fn canned(range: TimeRange) -> &'static CannedSeries {
    match range {
        TimeRange::OneMonth => &ONE_MONTH,
        TimeRange::ThreeMonths => &THREE_MONTHS,
        TimeRange::SixMonths => &SIX_MONTHS,
        TimeRange::OneYear => &ONE_YEAR,
    }
}

/// Historical prices followed by projected ones.
///
/// `labels` covers both: `labels.len() == historical.len() + projected.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    pub range: TimeRange,
    pub labels: Vec<String>,
    pub historical: Vec<f64>,
    pub projected: Vec<f64>,
}

impl PriceSeries {
    /// Last historical price
    pub fn current_price(&self) -> Option<f64> {
        self.historical.last().copied()
    }

    /// Last projected price
    pub fn predicted_price(&self) -> Option<f64> {
        self.projected.last().copied()
    }

    /// `(lastProjected - lastHistorical) / lastHistorical * 100`, one decimal
    pub fn percent_change(&self) -> Option<f64> {
        let current = self.current_price()?;
        let predicted = self.predicted_price()?;
        if current == 0.0 {
            return None;
        }
        Some(round_to((predicted - current) / current * 100.0, 1))
    }
}

/// Build the series for a range.
pub fn project(range: TimeRange) -> PriceSeries {
    let data = canned(range);
    let labels = data
        .labels
        .iter()
        .chain(data.projected_labels)
        .map(|label| label.to_string())
        .collect();

    PriceSeries {
        range,
        labels,
        historical: data.historical.to_vec(),
        projected: data.projected.to_vec(),
    }
}
