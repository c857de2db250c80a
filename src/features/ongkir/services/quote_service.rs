use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::ongkir::dtos::{CheckOngkirForm, ShippingQuoteDto};
use crate::modules::pcp::types::{CheckOngkirRequest, ShippingService};
use crate::modules::pcp::PcpTransportApi;
use crate::shared::constants::{MSG_CHECK_ONGKIR_ERROR, MSG_SHIPPING_RATES_FAILED};
use crate::shared::in_flight::RequestTracker;

/// Snapshot of the current shipping quote
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteState {
    pub shipping_services: Vec<ShippingService>,
    pub loading: bool,
    pub error: Option<String>,
}

impl QuoteState {
    pub fn quotes(&self) -> Vec<ShippingQuoteDto> {
        self.shipping_services
            .iter()
            .map(ShippingQuoteDto::from)
            .collect()
    }
}

/// Holds the result of a single shipping quote request.
///
/// Overlapping requests resolve to the most recently started one; an older
/// response arriving late is dropped. Abandoning a request (dropping its
/// future) never leaves `loading` stuck.
pub struct QuoteService {
    api: Arc<dyn PcpTransportApi>,
    state: Arc<RwLock<QuoteState>>,
    requests: RequestTracker,
}

impl QuoteService {
    pub fn new(api: Arc<dyn PcpTransportApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(QuoteState::default())),
            requests: RequestTracker::new(),
        }
    }

    /// Validate `form`, then request a quote.
    ///
    /// An invalid form is rejected with `AppError::Validation` before any
    /// network call, and the quote state is left untouched.
    pub async fn submit(&self, form: &CheckOngkirForm) -> Result<()> {
        let request = form.to_request()?;
        self.check_ongkir(&request).await;
        Ok(())
    }

    /// Request a quote. The request is not validated here.
    pub async fn check_ongkir(&self, request: &CheckOngkirRequest) {
        let flight = self
            .requests
            .begin(&self.state, |state: &mut QuoteState| state.loading = false);
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let outcome = self.api.check_ongkir(request).await;

        let mut state = self.state.write().await;
        if !flight.is_current() {
            tracing::debug!(
                "Discarding superseded ongkir response {} ({} -> {})",
                flight.generation(),
                request.origin_id,
                request.destination_id
            );
            flight.settle();
            return;
        }

        match outcome {
            Ok(response) if response.status => {
                let services = response.list.unwrap_or_default();
                tracing::info!(
                    "Received {} shipping services for {} -> {}",
                    services.len(),
                    request.origin_id,
                    request.destination_id
                );
                state.shipping_services = services;
            }
            Ok(_) => {
                tracing::warn!(
                    "Ongkir request rejected for {} -> {}",
                    request.origin_id,
                    request.destination_id
                );
                state.error = Some(MSG_SHIPPING_RATES_FAILED.to_string());
                state.shipping_services.clear();
            }
            Err(e) => {
                tracing::error!("Failed to check ongkir: {}", e);
                state.error = Some(e.display_message(MSG_CHECK_ONGKIR_ERROR));
                state.shipping_services.clear();
            }
        }
        state.loading = false;
        flight.settle();
    }

    /// Empty the result list and error. `loading` is left as is.
    pub async fn clear_results(&self) {
        let mut state = self.state.write().await;
        state.shipping_services.clear();
        state.error = None;
    }

    pub async fn snapshot(&self) -> QuoteState {
        self.state.read().await.clone()
    }
}
