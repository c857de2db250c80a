use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, Result};
use crate::features::ongkir::services::rate_formatter::format_rupiah;
use crate::modules::pcp::types::{CheckOngkirRequest, ShippingService};

const MSG_ORIGIN_DESTINATION_REQUIRED: &str = "Please fill in both origin and destination";
const MSG_WEIGHT_POSITIVE: &str = "Weight must be greater than 0";
const MSG_DIMENSION_NEGATIVE: &str = "Dimensions must not be negative";

/// Field order used to pick the message reported for an invalid form
const FORM_FIELDS: [&str; 6] = [
    "origin_id",
    "destination_id",
    "actual_weight",
    "length_cm",
    "width_cm",
    "height_cm",
];

/// Shipping quote form as entered by the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckOngkirForm {
    #[validate(regex(
        path = "*crate::shared::validation::NOT_BLANK_REGEX",
        message = "Please fill in both origin and destination"
    ))]
    pub origin_id: String,

    #[validate(regex(
        path = "*crate::shared::validation::NOT_BLANK_REGEX",
        message = "Please fill in both origin and destination"
    ))]
    pub destination_id: String,

    /// Kilograms
    #[validate(range(exclusive_min = 0.0, message = "Weight must be greater than 0"))]
    pub actual_weight: f64,

    #[validate(range(min = 0.0, message = "Dimensions must not be negative"))]
    #[serde(default)]
    pub length_cm: f64,

    #[validate(range(min = 0.0, message = "Dimensions must not be negative"))]
    #[serde(default)]
    pub width_cm: f64,

    #[validate(range(min = 0.0, message = "Dimensions must not be negative"))]
    #[serde(default)]
    pub height_cm: f64,
}

impl Default for CheckOngkirForm {
    fn default() -> Self {
        Self {
            origin_id: String::new(),
            destination_id: String::new(),
            actual_weight: 1.0,
            length_cm: 0.0,
            width_cm: 0.0,
            height_cm: 0.0,
        }
    }
}

impl CheckOngkirForm {
    /// Validate and convert to an API request.
    ///
    /// Fails with `AppError::Validation` carrying the first problem in form order.
    pub fn to_request(&self) -> Result<CheckOngkirRequest> {
        self.validate()
            .map_err(|e| AppError::Validation(first_error_message(&e)))?;

        if !self.actual_weight.is_finite() {
            return Err(AppError::Validation(MSG_WEIGHT_POSITIVE.to_string()));
        }
        if ![self.length_cm, self.width_cm, self.height_cm]
            .iter()
            .all(|d| d.is_finite())
        {
            return Err(AppError::Validation(MSG_DIMENSION_NEGATIVE.to_string()));
        }

        Ok(CheckOngkirRequest {
            origin_id: self.origin_id.clone(),
            destination_id: self.destination_id.clone(),
            actual_weight: self.actual_weight,
            length_cm: Some(self.length_cm),
            width_cm: Some(self.width_cm),
            height_cm: Some(self.height_cm),
        })
    }
}

fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    FORM_FIELDS
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Display-ready line of a shipping quote
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuoteDto {
    pub service_id: String,
    pub service_code: String,
    pub service_name: String,
    /// "Rp 15.000"
    pub rate_label: String,
    /// "3 days"
    pub lead_time_label: String,
    /// "1 - 30 kg"
    pub weight_range_label: String,
    pub result: String,
}

impl From<&ShippingService> for ShippingQuoteDto {
    fn from(service: &ShippingService) -> Self {
        Self {
            service_id: service.service_id.clone(),
            service_code: service.service_code.clone(),
            service_name: service.service_name.clone(),
            rate_label: format_rupiah(&service.rate),
            lead_time_label: format!("{} days", service.lead_time),
            weight_range_label: format!("{} - {} kg", service.min_kg, service.max_kg),
            result: service.result.clone(),
        }
    }
}
