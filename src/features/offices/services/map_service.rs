//! Helpers for the office overview map.
//!
//! There is no real map: offices are placed in a fixed box by a linear
//! pseudo-projection of latitude/longitude, clamped to stay inside the frame.

use serde::Serialize;

use crate::features::offices::models::BranchOffice;

const MIN_PERCENT: f64 = 5.0;
const MAX_PERCENT: f64 = 95.0;

/// Marker position inside the map box, in percent of width/height
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub office_id: String,
    pub name: String,
    pub left_percent: f64,
    pub top_percent: f64,
}

/// Offices that pass the `has_coordinates` heuristic, in input order
pub fn offices_with_coordinates(offices: &[BranchOffice]) -> Vec<&BranchOffice> {
    offices.iter().filter(|o| o.has_coordinates()).collect()
}

pub fn project(office: &BranchOffice) -> MapMarker {
    let lat_norm = (office.latitude + 10.0) / 20.0;
    let lng_norm = (office.longitude + 100.0) / 50.0;

    MapMarker {
        office_id: office.id.clone(),
        name: office.name.clone(),
        left_percent: (lng_norm * 100.0).clamp(MIN_PERCENT, MAX_PERCENT),
        top_percent: (lat_norm * 100.0).clamp(MIN_PERCENT, MAX_PERCENT),
    }
}

/// Markers for every located office; offices without coordinates are skipped
pub fn project_offices(offices: &[BranchOffice]) -> Vec<MapMarker> {
    offices_with_coordinates(offices)
        .into_iter()
        .map(project)
        .collect()
}

/// Google Maps directions link through every located office, None if there are none
pub fn directions_url(offices: &[BranchOffice]) -> Option<String> {
    let stops: Vec<String> = offices_with_coordinates(offices)
        .iter()
        .map(|o| format!("{},{}", o.latitude, o.longitude))
        .collect();

    if stops.is_empty() {
        return None;
    }
    Some(format!("https://www.google.com/maps/dir/{}", stops.join("|")))
}
