//! Shipment tracking by AWB (airway bill) number.

pub mod services;

pub use services::TrackingService;
