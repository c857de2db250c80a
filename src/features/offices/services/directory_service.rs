use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::features::offices::dtos::OfficeFilter;
use crate::features::offices::models::BranchOffice;
use crate::features::offices::services::transformer::transform_to_branch_offices;
use crate::modules::pcp::PcpTransportApi;
use crate::shared::constants::MSG_FETCH_OFFICES_FAILED;
use crate::shared::in_flight::RequestTracker;

/// Snapshot of the office directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    pub offices: Vec<BranchOffice>,
    /// Unique province names, sorted ascending
    pub provinces: Vec<String>,
    /// Unique branch names, sorted ascending
    pub branches: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub current_region: Option<String>,
}

impl DirectoryState {
    /// Offices matching `filter`, in directory order
    pub fn filtered<'a>(&'a self, filter: &OfficeFilter) -> Vec<&'a BranchOffice> {
        filter.apply(&self.offices)
    }
}

/// Holds "all offices, optionally scoped to a region".
///
/// Every fetch is tagged with a generation number; when fetches overlap only
/// the most recently started one may write its outcome. A fetch whose future
/// is dropped hands that right back to the newest fetch still in flight.
pub struct OfficeDirectoryService {
    api: Arc<dyn PcpTransportApi>,
    state: Arc<RwLock<DirectoryState>>,
    requests: RequestTracker,
    initialized: AtomicBool,
}

impl OfficeDirectoryService {
    pub fn new(api: Arc<dyn PcpTransportApi>) -> Self {
        Self::with_region(api, None)
    }

    /// Start with `region` remembered; `initialize` will fetch with it.
    pub fn with_region(api: Arc<dyn PcpTransportApi>, region: Option<String>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(DirectoryState {
                current_region: region,
                ..Default::default()
            })),
            requests: RequestTracker::new(),
            initialized: AtomicBool::new(false),
        }
    }

    /// First load. Only the first call fetches; later calls are no-ops.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }
        let region = self.state.read().await.current_region.clone();
        self.fetch(region, false).await;
    }

    /// Fetch again with the remembered region (or none)
    pub async fn refetch(&self) {
        let region = self.state.read().await.current_region.clone();
        self.fetch(region, false).await;
    }

    /// Remember `region` and fetch offices scoped to it
    pub async fn fetch_by_region(&self, region: &str) {
        self.fetch(Some(region.to_string()), true).await;
    }

    /// Quick-filter behaviour: an empty region refetches with the remembered
    /// region, anything else switches to that region.
    pub async fn apply_region_filter(&self, region: &str) {
        if region.is_empty() {
            self.refetch().await;
        } else {
            self.fetch_by_region(region).await;
        }
    }

    pub async fn snapshot(&self) -> DirectoryState {
        self.state.read().await.clone()
    }

    async fn fetch(&self, region: Option<String>, remember: bool) {
        let flight = self
            .requests
            .begin(&self.state, |state: &mut DirectoryState| state.loading = false);
        {
            let mut state = self.state.write().await;
            if remember {
                state.current_region = region.clone();
            }
            state.loading = true;
            state.error = None;
        }

        let outcome = self.api.get_branch_offices(region.as_deref()).await;

        let mut state = self.state.write().await;
        if !flight.is_current() {
            tracing::debug!(
                "Discarding superseded branch office response {} (region: {:?})",
                flight.generation(),
                region
            );
            flight.settle();
            return;
        }

        match outcome {
            Ok(response) if response.status => {
                let offices = transform_to_branch_offices(&response);
                state.provinces = unique_sorted(offices.iter().map(|o| o.province_name.as_str()));
                state.branches = unique_sorted(offices.iter().map(|o| o.branch_name.as_str()));
                tracing::info!(
                    "Loaded {} branch offices across {} provinces (region: {:?})",
                    offices.len(),
                    state.provinces.len(),
                    region
                );
                state.offices = offices;
            }
            Ok(response) => {
                let message = if response.msg.trim().is_empty() {
                    MSG_FETCH_OFFICES_FAILED.to_string()
                } else {
                    response.msg
                };
                tracing::warn!("Branch office request rejected: {}", message);
                state.error = Some(message);
            }
            Err(e) => {
                tracing::error!("Failed to fetch branch offices: {}", e);
                state.error = Some(e.display_message(MSG_FETCH_OFFICES_FAILED));
            }
        }
        state.loading = false;
        flight.settle();
    }
}

fn unique_sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
