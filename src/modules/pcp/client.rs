//! reqwest-backed client for the PCP Transport public API
//!
//! One attempt per call: no retry, no timeout, no backoff.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::config::PcpApiConfig;
use crate::core::error::{AppError, Result};
use crate::modules::pcp::types::{
    ApiErrorBody, BranchOfficeApiResponse, CheckOngkirRequest, CheckOngkirResponse,
    GetBranchOfficesRequest, TrackingRequest,
};
use crate::modules::pcp::PcpTransportApi;
use crate::shared::constants::{
    ACCESS_TOKEN_HEADER, CHECK_ONGKIR_PATH, MSG_NETWORK_NOT_OK, OFFICES_PATH, TRACKING_PATH,
};

/// Client for the PCP Transport API.
///
/// Base URL and credential are fixed at construction; the value is immutable
/// afterwards and can be shared freely behind an `Arc`.
pub struct PcpTransportClient {
    http_client: Client,
    base_url: String,
}

impl PcpTransportClient {
    pub fn new(config: PcpApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let token = HeaderValue::from_str(&config.access_token).map_err(|e| {
            AppError::Config(format!("Access token is not a valid header value: {}", e))
        })?;
        let token_header = HeaderName::from_bytes(ACCESS_TOKEN_HEADER.as_bytes())
            .map_err(|e| AppError::Config(format!("Invalid header name: {}", e)))?;
        headers.insert(token_header, token);

        let http_client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send a request and decode its JSON body.
    ///
    /// Non-2xx responses become `AppError::Network` carrying the server's `msg`
    /// when the error body has one.
    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("PCP Transport API error ({}): {}", endpoint, e);
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("PCP Transport API error ({}): {}", endpoint, e);
            AppError::Network(e.to_string())
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .map(|b| b.msg)
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| MSG_NETWORK_NOT_OK.to_string());
            tracing::error!(
                "PCP Transport API error ({}): HTTP {} - {}",
                endpoint,
                status,
                message
            );
            return Err(AppError::Network(message));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse PCP response ({}): {}", endpoint, e);
            AppError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl PcpTransportApi for PcpTransportClient {
    async fn get_branch_offices(&self, region: Option<&str>) -> Result<BranchOfficeApiResponse> {
        let body = GetBranchOfficesRequest::for_region(region);
        tracing::debug!("Fetching branch offices (region: {:?})", body.region);

        let request = self.http_client.post(self.url(OFFICES_PATH)).json(&body);
        self.execute(OFFICES_PATH, request).await
    }

    async fn check_ongkir(&self, request: &CheckOngkirRequest) -> Result<CheckOngkirResponse> {
        let url = format!("{}?{}", self.url(CHECK_ONGKIR_PATH), request.query_string());
        tracing::debug!(
            "Checking ongkir {} -> {} ({} kg)",
            request.origin_id,
            request.destination_id,
            request.actual_weight
        );

        self.execute(CHECK_ONGKIR_PATH, self.http_client.get(url)).await
    }

    async fn get_tracking_info(&self, awb_no: &str) -> Result<Value> {
        let body = TrackingRequest {
            awb_no: awb_no.to_string(),
        };
        tracing::debug!("Fetching tracking info for AWB {}", awb_no);

        let request = self.http_client.post(self.url(TRACKING_PATH)).json(&body);
        self.execute(TRACKING_PATH, request).await
    }
}
