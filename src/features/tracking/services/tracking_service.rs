use std::sync::Arc;

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::modules::pcp::PcpTransportApi;

/// Shipment lookup by AWB number. The tracking payload is passed through as-is.
pub struct TrackingService {
    api: Arc<dyn PcpTransportApi>,
}

impl TrackingService {
    pub fn new(api: Arc<dyn PcpTransportApi>) -> Self {
        Self { api }
    }

    pub async fn track(&self, awb_no: &str) -> Result<Value> {
        let awb_no = awb_no.trim();
        if awb_no.is_empty() {
            return Err(AppError::Validation("Please enter an AWB number".to_string()));
        }

        self.api.get_tracking_info(awb_no).await.inspect_err(|e| {
            tracing::error!("Failed to fetch tracking info for {}: {}", awb_no, e);
        })
    }
}
