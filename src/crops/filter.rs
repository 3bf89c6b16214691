//! Crop catalog filtering
//!
//! Crop name and soil type are matched case-insensitively and exactly.
//! `"all"` (or no value) disables a constraint; the two constraints AND together.

use super::catalog::CropProfile;

/// Crop browser filters, as sent by the crop / soil dropdowns
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CropFilters {
    pub crop: Option<String>,
    pub soil: Option<String>,
}

impl CropFilters {
    pub fn apply<'a>(&self, catalog: &'a [CropProfile]) -> Vec<&'a CropProfile> {
        filter_crops(catalog, self.crop.as_deref(), self.soil.as_deref())
    }
}

/// `None`, empty and "all" mean "no constraint".
fn constraint(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Filter the catalog, preserving catalog order.
///
/// Returns an empty list when nothing matches.
pub fn filter_crops<'a>(
    catalog: &'a [CropProfile],
    crop: Option<&str>,
    soil: Option<&str>,
) -> Vec<&'a CropProfile> {
    let crop = constraint(crop);
    let soil = constraint(soil);

    let matches: Vec<&CropProfile> = catalog
        .iter()
        .filter(|profile| crop.map_or(true, |name| profile.name.eq_ignore_ascii_case(name)))
        .filter(|profile| soil.map_or(true, |soil| profile.grows_in(soil)))
        .collect();

    tracing::debug!(
        "Crop filter (crop: {:?}, soil: {:?}) matched {} of {}",
        crop,
        soil,
        matches.len(),
        catalog.len()
    );

    matches
}

/// Look up a crop by catalog id (crop detail view).
pub fn find_crop(catalog: &[CropProfile], id: u32) -> Option<&CropProfile> {
    catalog.iter().find(|profile| profile.id == id)
}
