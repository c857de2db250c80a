//! Shipping cost ("ongkir") quotes between two PCP offices.
//!
//! `CheckOngkirForm` is the validation boundary: an invalid form never reaches
//! the API. `QuoteService` keeps the service list of the latest request.

pub mod dtos;
pub mod services;

pub use dtos::{CheckOngkirForm, ShippingQuoteDto};
pub use services::{QuoteService, QuoteState};
