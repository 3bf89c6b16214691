// Sample Reports
//
// Runs every deriver once on a fixed sample input and prints the JSON results.
// Usage: cargo run --bin sample_reports [seed]

use anyhow::{Context, Result};
use farm_advisor::crops::{crop_catalog, filter_crops};
use farm_advisor::diagnosis::diagnose;
use farm_advisor::market::{project, MarketInsight, TimeRange};
use farm_advisor::planner::{plan, FarmPlanRequest};
use farm_advisor::soil::{score, SoilReading};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn print_section(title: &str, value: &impl serde::Serialize) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
    println!("{}\n", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let seed: u64 = match std::env::args().nth(1) {
        Some(raw) => raw.parse().with_context(|| format!("Invalid seed: {}", raw))?,
        None => 42,
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let reading = SoilReading {
        nitrogen: 85.0,
        phosphorus: 32.0,
        potassium: 140.0,
        ph: 5.8,
        organic_matter_percent: 2.4,
        soil_type: "loamy".to_string(),
    };
    print_section("Soil Health", &score(&reading))?;

    let request = FarmPlanRequest {
        farm_size_acres: 10.0,
        crop: "wheat".to_string(),
        soil_type: "loamy".to_string(),
        water_source: "irrigation".to_string(),
        planting_date: "2024-01-01".to_string(),
    };
    print_section("Farm Plan", &plan(&request)?)?;

    print_section(
        "Crops for clay soil",
        &filter_crops(crop_catalog(), None, Some("clay")),
    )?;

    let series = project(TimeRange::SixMonths);
    print_section("Market Series (6m)", &series)?;
    print_section(
        "Market Insight",
        &MarketInsight::build("wheat", &series, &mut rng),
    )?;

    print_section("Diagnosis", &diagnose(&mut rng))?;

    Ok(())
}
