//! Fixtures and fakes shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use fake::faker::address::en::CityName;
use fake::Fake;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use crate::core::error::{AppError, Result};
use crate::modules::pcp::types::{
    Branch, BranchOfficeApiResponse, CheckOngkirRequest, CheckOngkirResponse, OfficeSite,
    Province, ShippingService,
};
use crate::modules::pcp::PcpTransportApi;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_mock_api(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a local port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn office_site(id: &str) -> OfficeSite {
    OfficeSite {
        office_site_id: id.to_string(),
        office_name: format!("{} Office", CityName().fake::<String>()),
        address1: "Jl. Sudirman No. 1".to_string(),
        address2: "-".to_string(),
        address3: String::new(),
        latitude: "-6.2".to_string(),
        longitude: "106.8".to_string(),
    }
}

/// Province with `(branch_id, branch_name, office_count)` branches.
/// Office ids are `"{branch_id}-O{index}"`.
pub fn province(id: &str, name: &str, branches: &[(&str, &str, usize)]) -> Province {
    Province {
        province_id: id.to_string(),
        province_name: name.to_string(),
        branches: branches
            .iter()
            .map(|(branch_id, branch_name, count)| Branch {
                branch_id: branch_id.to_string(),
                branch_name: branch_name.to_string(),
                office_sites: (0..*count)
                    .map(|i| office_site(&format!("{}-O{}", branch_id, i)))
                    .collect(),
            })
            .collect(),
    }
}

pub fn offices_response(provinces: Vec<Province>) -> BranchOfficeApiResponse {
    BranchOfficeApiResponse {
        status: true,
        msg: "OK".to_string(),
        data: Some(provinces),
    }
}

pub fn shipping_service(code: &str, rate: &str) -> ShippingService {
    ShippingService {
        service_id: format!("svc-{}", code.to_lowercase()),
        service_code: code.to_string(),
        service_name: format!("{} Service", code),
        rate: rate.to_string(),
        lead_time: "2".to_string(),
        result: "OK".to_string(),
        rate_tiers: None,
        min_kg: "1".to_string(),
        max_kg: "30".to_string(),
    }
}

pub fn ongkir_request(weight: f64) -> CheckOngkirRequest {
    CheckOngkirRequest {
        origin_id: "JKT1114500".to_string(),
        destination_id: "BPN2001900".to_string(),
        actual_weight: weight,
        length_cm: None,
        width_cm: None,
        height_cm: None,
    }
}

struct ScriptedReply<T> {
    result: Result<T>,
    gate: Option<oneshot::Receiver<()>>,
}

impl<T> ScriptedReply<T> {
    async fn resolve(self) -> Result<T> {
        if let Some(gate) = self.gate {
            let _ = gate.await;
        }
        self.result
    }
}

/// Scripted `PcpTransportApi`: replies are served in push order and every
/// call is recorded. A gated reply is held until its sender fires.
#[derive(Default)]
pub struct FakePcpApi {
    office_replies: Mutex<VecDeque<ScriptedReply<BranchOfficeApiResponse>>>,
    ongkir_replies: Mutex<VecDeque<ScriptedReply<CheckOngkirResponse>>>,
    office_calls: Mutex<Vec<Option<String>>>,
    ongkir_calls: Mutex<Vec<CheckOngkirRequest>>,
    tracking_calls: Mutex<Vec<String>>,
}

impl FakePcpApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_offices(&self, result: Result<BranchOfficeApiResponse>) {
        self.office_replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply { result, gate: None });
    }

    pub fn push_offices_gated(
        &self,
        result: Result<BranchOfficeApiResponse>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.office_replies.lock().unwrap().push_back(ScriptedReply {
            result,
            gate: Some(rx),
        });
        tx
    }

    pub fn push_ongkir(&self, result: Result<CheckOngkirResponse>) {
        self.ongkir_replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply { result, gate: None });
    }

    pub fn push_ongkir_gated(&self, result: Result<CheckOngkirResponse>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.ongkir_replies.lock().unwrap().push_back(ScriptedReply {
            result,
            gate: Some(rx),
        });
        tx
    }

    pub fn office_calls(&self) -> Vec<Option<String>> {
        self.office_calls.lock().unwrap().clone()
    }

    pub fn ongkir_calls(&self) -> Vec<CheckOngkirRequest> {
        self.ongkir_calls.lock().unwrap().clone()
    }

    pub fn tracking_calls(&self) -> Vec<String> {
        self.tracking_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PcpTransportApi for FakePcpApi {
    async fn get_branch_offices(&self, region: Option<&str>) -> Result<BranchOfficeApiResponse> {
        let reply = {
            self.office_calls
                .lock()
                .unwrap()
                .push(region.map(String::from));
            self.office_replies.lock().unwrap().pop_front()
        };
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(AppError::Network("no scripted office reply".to_string())),
        }
    }

    async fn check_ongkir(&self, request: &CheckOngkirRequest) -> Result<CheckOngkirResponse> {
        let reply = {
            self.ongkir_calls.lock().unwrap().push(request.clone());
            self.ongkir_replies.lock().unwrap().pop_front()
        };
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(AppError::Network("no scripted ongkir reply".to_string())),
        }
    }

    async fn get_tracking_info(&self, awb_no: &str) -> Result<Value> {
        self.tracking_calls.lock().unwrap().push(awb_no.to_string());
        Ok(json!({ "status": true, "awb_no": awb_no }))
    }
}
