//! Farm Advisor
//!
//! Rule-based agronomy calculators behind the farm dashboard:
//! - `soil/`: soil health score, nutrient statuses and amendment advice
//! - `planner/`: harvest date, yield, water requirement and crop timeline
//! - `crops/`: crop catalog and crop / soil filtering
//! - `market/`: canned price series with fixed projected points
//! - `diagnosis`: mock diagnosis picked from an injected RNG
//! - `reference/`: crop / soil / water lookup tables
//!
//! Every deriver is a pure function of its input (plus an RNG where noted).
//! The `api` feature adds an Axum server exposing one endpoint per deriver.

pub mod error;
pub mod utils;
pub mod reference;
pub mod crops;
pub mod soil;
pub mod planner;
pub mod market;
pub mod diagnosis;
pub mod inquiry;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{FarmError, Result};
pub use config::ServerConfig;
pub use crops::{crop_catalog, filter_crops, CropProfile};
pub use soil::{score, SoilReading, SoilScoreResult};
pub use planner::{plan, FarmPlanRequest, FarmPlanResult};
pub use market::{project, MarketInsight, PriceSeries, TimeRange};
pub use diagnosis::{diagnose, DiagnosisRecord};
pub use inquiry::{validate_inquiry, Inquiry};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
