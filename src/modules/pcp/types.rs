//! Wire types of the PCP Transport API.
//!
//! The API is loosely typed: numbers arrive as strings, fields go missing or
//! come back `null`. Every text field is modelled as a `String` that defaults
//! to empty, and conversion to numbers happens later in an explicit step.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accepts a string, number, bool or null and yields a `String` ("" for null).
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    })
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// OFFICE LOCATIONS
// =============================================================================

/// A single physical office, the leaf of the location tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfficeSite {
    #[serde(default, deserialize_with = "lenient_string")]
    pub office_site_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub office_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address2: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address3: String,
    /// Decimal string; "-" or "" when unknown
    #[serde(default, deserialize_with = "lenient_string")]
    pub latitude: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub longitude: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Branch {
    #[serde(default, deserialize_with = "lenient_string")]
    pub branch_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub branch_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub office_sites: Vec<OfficeSite>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Province {
    #[serde(default, deserialize_with = "lenient_string")]
    pub province_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub province_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub branches: Vec<Branch>,
}

/// Response of `POST /api/locations/office`.
///
/// `status == false` is a logical failure even on HTTP 200.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchOfficeApiResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub msg: String,
    #[serde(default)]
    pub data: Option<Vec<Province>>,
}

/// Body of `POST /api/locations/office`
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetBranchOfficesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl GetBranchOfficesRequest {
    /// An empty region means no filter, so it is left out of the body.
    pub fn for_region(region: Option<&str>) -> Self {
        Self {
            region: region.filter(|r| !r.is_empty()).map(String::from),
        }
    }
}

// =============================================================================
// SHIPPING QUOTES (ONGKIR)
// =============================================================================

/// One shipping service offered for a route. Display-only, passed through as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShippingService {
    #[serde(default, deserialize_with = "lenient_string")]
    pub service_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub service_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub service_name: String,
    /// Rupiah amount without minor units, e.g. "15000"
    #[serde(default, deserialize_with = "lenient_string")]
    pub rate: String,
    /// Days
    #[serde(default, deserialize_with = "lenient_string")]
    pub lead_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_tiers: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub min_kg: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub max_kg: String,
}

/// Response of `GET /api/check-ongkir`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckOngkirResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: bool,
    #[serde(default)]
    pub list: Option<Vec<ShippingService>>,
}

/// Shipping quote request between two offices
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOngkirRequest {
    pub origin_id: String,
    pub destination_id: String,
    /// Kilograms, must be > 0
    pub actual_weight: f64,
    pub length_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub height_cm: Option<f64>,
}

impl CheckOngkirRequest {
    /// Query parameters in the order the API documents them. Missing dimensions are sent as 0.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("originId", self.origin_id.clone()),
            ("destinationId", self.destination_id.clone()),
            ("actualWeight", self.actual_weight.to_string()),
            ("lengthCm", self.length_cm.unwrap_or(0.0).to_string()),
            ("widthCm", self.width_cm.unwrap_or(0.0).to_string()),
            ("heightCm", self.height_cm.unwrap_or(0.0).to_string()),
        ]
    }

    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// =============================================================================
// TRACKING
// =============================================================================

/// Body of `POST /api/tracking/web`
#[derive(Debug, Clone, Serialize)]
pub struct TrackingRequest {
    pub awb_no: String,
}

/// Error body the API sends alongside non-2xx statuses
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_office_response_deserializes_pascal_case() {
        let response: BranchOfficeApiResponse = serde_json::from_value(json!({
            "status": true,
            "msg": "OK",
            "data": [{
                "ProvinceId": "P1",
                "ProvinceName": "Jawa",
                "Branches": [{
                    "BranchId": "B1",
                    "BranchName": "Jakarta",
                    "OfficeSites": [{
                        "OfficeSiteId": "O1",
                        "OfficeName": "JKT Center",
                        "Address1": "Jl. A",
                        "Address2": "-",
                        "Address3": "",
                        "Latitude": "-6.2",
                        "Longitude": "106.8"
                    }]
                }]
            }]
        }))
        .unwrap();

        assert!(response.status);
        let provinces = response.data.unwrap();
        let office = &provinces[0].branches[0].office_sites[0];
        assert_eq!(office.office_site_id, "O1");
        assert_eq!(office.address2, "-");
        assert_eq!(office.latitude, "-6.2");
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let response: BranchOfficeApiResponse = serde_json::from_value(json!({
            "status": true,
            "msg": null,
            "data": [{
                "ProvinceId": 7,
                "Branches": null
            }]
        }))
        .unwrap();

        assert_eq!(response.msg, "");
        let province = &response.data.unwrap()[0];
        assert_eq!(province.province_id, "7");
        assert_eq!(province.province_name, "");
        assert!(province.branches.is_empty());
    }

    #[test]
    fn test_logical_failure_without_data() {
        let response: BranchOfficeApiResponse =
            serde_json::from_value(json!({ "status": false, "msg": "Region unknown" })).unwrap();
        assert!(!response.status);
        assert!(response.data.is_none());
    }

    #[test]
    fn test_shipping_service_accepts_numeric_fields() {
        let service: ShippingService = serde_json::from_value(json!({
            "ServiceId": 3,
            "ServiceCode": "REG",
            "ServiceName": "Regular",
            "Rate": 15000,
            "LeadTime": "2-3",
            "MinKg": "1",
            "MaxKg": "30"
        }))
        .unwrap();

        assert_eq!(service.service_id, "3");
        assert_eq!(service.rate, "15000");
        assert_eq!(service.result, "");
        assert!(service.rate_tiers.is_none());
    }

    #[test]
    fn test_get_branch_offices_request_omits_empty_region() {
        let body = serde_json::to_value(GetBranchOfficesRequest::for_region(None)).unwrap();
        assert_eq!(body, json!({}));

        let body = serde_json::to_value(GetBranchOfficesRequest::for_region(Some(""))).unwrap();
        assert_eq!(body, json!({}));

        let body = serde_json::to_value(GetBranchOfficesRequest::for_region(Some("JAWA"))).unwrap();
        assert_eq!(body, json!({ "region": "JAWA" }));
    }

    #[test]
    fn test_check_ongkir_query_defaults_dimensions_to_zero() {
        let request = CheckOngkirRequest {
            origin_id: "JKT1114500".to_string(),
            destination_id: "BPN2001900".to_string(),
            actual_weight: 1.5,
            length_cm: Some(10.0),
            width_cm: None,
            height_cm: None,
        };

        assert_eq!(
            request.query_string(),
            "originId=JKT1114500&destinationId=BPN2001900&actualWeight=1.5&lengthCm=10&widthCm=0&heightCm=0"
        );
    }

    #[test]
    fn test_check_ongkir_query_encodes_ids() {
        let request = CheckOngkirRequest {
            origin_id: "A&B".to_string(),
            destination_id: "C D".to_string(),
            actual_weight: 2.0,
            length_cm: None,
            width_cm: None,
            height_cm: None,
        };

        assert!(request
            .query_string()
            .starts_with("originId=A%26B&destinationId=C%20D&actualWeight=2&"));
    }
}
