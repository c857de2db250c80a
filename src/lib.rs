//! Client core of the PCP Transport customer site: branch office directory,
//! shipping cost ("ongkir") quotes and AWB tracking against the public PCP API.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::core::config::{AppConfig, Config, PcpApiConfig};
pub use crate::core::error::{AppError, Result};
pub use crate::modules::pcp::{PcpTransportApi, PcpTransportClient};
