//! PCP Transport API module
//!
//! Wire types, the `PcpTransportApi` seam used by the state services, and the
//! reqwest implementation that talks to the real endpoint.

mod client;
pub mod types;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::Result;

pub use client::PcpTransportClient;
pub use types::{
    Branch, BranchOfficeApiResponse, CheckOngkirRequest, CheckOngkirResponse, OfficeSite,
    Province, ShippingService,
};

/// Operations offered by the PCP Transport API.
///
/// State services depend on this trait rather than on `PcpTransportClient`
/// so tests can substitute the transport.
#[async_trait]
pub trait PcpTransportApi: Send + Sync {
    /// `POST /api/locations/office`, optionally scoped to a region
    async fn get_branch_offices(&self, region: Option<&str>) -> Result<BranchOfficeApiResponse>;

    /// `GET /api/check-ongkir`
    async fn check_ongkir(&self, request: &CheckOngkirRequest) -> Result<CheckOngkirResponse>;

    /// `POST /api/tracking/web`. The payload is returned untouched.
    async fn get_tracking_info(&self, awb_no: &str) -> Result<Value>;
}
