//! Crop catalog and filtering

pub mod catalog;
pub mod filter;

pub use catalog::{crop_catalog, ChemicalTreatment, CropProfile};
pub use filter::{filter_crops, find_crop, CropFilters};
