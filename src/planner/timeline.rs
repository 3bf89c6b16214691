//! Crop timeline milestones
//!
//! Five fixed milestones. Day 30/45/60 checkpoints are constant offsets and do
//! not scale with crop length; only the harvest milestone uses the crop duration.

use chrono::NaiveDate;
use serde::Serialize;

use super::add_days;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimelineActivity {
    Planting,
    #[serde(rename = "First Fertilization")]
    FirstFertilization,
    #[serde(rename = "Irrigation Check")]
    IrrigationCheck,
    #[serde(rename = "Pest Control")]
    PestControl,
    Harvest,
}

impl TimelineActivity {
    pub fn label(&self) -> &'static str {
        match self {
            TimelineActivity::Planting => "Planting",
            TimelineActivity::FirstFertilization => "First Fertilization",
            TimelineActivity::IrrigationCheck => "Irrigation Check",
            TimelineActivity::PestControl => "Pest Control",
            TimelineActivity::Harvest => "Harvest",
        }
    }
}

/// Milestone offset: fixed day, or the crop's full duration
#[derive(Debug, Clone, Copy)]
pub enum MilestoneOffset {
    Day(u32),
    Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub activity: TimelineActivity,
    pub offset: MilestoneOffset,
}

pub static MILESTONES: &[Milestone] = &[
    Milestone { activity: TimelineActivity::Planting, offset: MilestoneOffset::Day(0) },
    Milestone { activity: TimelineActivity::FirstFertilization, offset: MilestoneOffset::Day(30) },
    Milestone { activity: TimelineActivity::IrrigationCheck, offset: MilestoneOffset::Day(45) },
    Milestone { activity: TimelineActivity::PestControl, offset: MilestoneOffset::Day(60) },
    Milestone { activity: TimelineActivity::Harvest, offset: MilestoneOffset::Duration },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    pub date: NaiveDate,
    pub day_offset: u32,
    pub activity: TimelineActivity,
    pub description: String,
}

fn describe(activity: TimelineActivity, crop: &str, soil: &str) -> String {
    match activity {
        TimelineActivity::Planting => format!("Plant {} seeds in prepared {} soil", crop, soil),
        TimelineActivity::FirstFertilization => {
            format!("Apply NPK fertilizer according to {} soil test results", soil)
        }
        TimelineActivity::IrrigationCheck => {
            "Monitor soil moisture and irrigate if needed".to_string()
        }
        TimelineActivity::PestControl => {
            format!("Monitor {} for pests and apply treatments if necessary", crop)
        }
        TimelineActivity::Harvest => format!("Harvest {} when mature", crop),
    }
}

/// Build the five timeline events for a planting.
pub fn build_timeline(
    planting_date: NaiveDate,
    duration_days: u32,
    crop: &str,
    soil: &str,
) -> Result<Vec<TimelineEvent>> {
    MILESTONES
        .iter()
        .map(|milestone| {
            let day_offset = match milestone.offset {
                MilestoneOffset::Day(day) => day,
                MilestoneOffset::Duration => duration_days,
            };
            Ok(TimelineEvent {
                date: add_days(planting_date, day_offset)?,
                day_offset,
                activity: milestone.activity,
                description: describe(milestone.activity, crop, soil),
            })
        })
        .collect()
}
