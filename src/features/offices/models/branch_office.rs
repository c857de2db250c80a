use serde::Serialize;

/// Latitude/longitude pair mirroring `BranchOffice::latitude` and `longitude`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Flattened office record, one per office site in the API tree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchOffice {
    pub id: String,
    pub name: String,
    pub branch_id: String,
    pub branch_name: String,
    pub province_id: String,
    pub province_name: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    /// Non-empty, non-"-" address lines joined with ", "
    pub full_address: String,
    /// 0.0 when the API value is missing or unparseable
    pub latitude: f64,
    pub longitude: f64,
    pub coordinates: Coordinates,
}

impl BranchOffice {
    /// False when either coordinate is exactly 0.0, including a genuine
    /// equator or prime-meridian position.
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }

    /// "-6.200000, 106.800000"
    pub fn coordinates_label(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }

    /// Google Maps link for this office, None without coordinates
    pub fn google_maps_url(&self) -> Option<String> {
        self.has_coordinates().then(|| {
            format!(
                "https://www.google.com/maps?q={},{}",
                self.latitude, self.longitude
            )
        })
    }
}
