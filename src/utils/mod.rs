//! Utility modules shared across the derivers

pub mod rounding;

pub use rounding::round_to;
