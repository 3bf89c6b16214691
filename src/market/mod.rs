//! Market price trend
//!
//! Deterministic stub: historical prices are canned per time range and the
//! "projection" appends fixed literal points. There is no forecasting model.

pub mod projector;
pub mod insight;

pub use projector::{project, PriceSeries, TimeRange};
pub use insight::{MarketInsight, Trend};
