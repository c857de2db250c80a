mod quote_service;
pub mod rate_formatter;

pub use quote_service::{QuoteService, QuoteState};
