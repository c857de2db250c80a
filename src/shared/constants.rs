// =============================================================================
// PCP TRANSPORT API
// =============================================================================

/// Public PCP Transport API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.pcptransport.com";

/// Static credential used by the public website
pub const DEFAULT_ACCESS_TOKEN: &str = "YWRtaW4=";

/// Header carrying the static credential
pub const ACCESS_TOKEN_HEADER: &str = "Access-Token";

pub const OFFICES_PATH: &str = "/api/locations/office";
pub const TRACKING_PATH: &str = "/api/tracking/web";
pub const CHECK_ONGKIR_PATH: &str = "/api/check-ongkir";

// =============================================================================
// USER-FACING FALLBACK MESSAGES
// =============================================================================

pub const MSG_NETWORK_NOT_OK: &str = "Network response was not ok";
pub const MSG_FETCH_OFFICES_FAILED: &str = "Failed to fetch branch offices";
pub const MSG_SHIPPING_RATES_FAILED: &str = "Failed to get shipping rates";
pub const MSG_CHECK_ONGKIR_ERROR: &str = "An error occurred while checking shipping rates";

// =============================================================================
// REGIONS
// =============================================================================

/// Regions offered as one-click filters on the office directory
pub const QUICK_REGIONS: [&str; 4] = ["JAWA", "SUMATERA", "KALIMANTAN", "SULAWESI"];
